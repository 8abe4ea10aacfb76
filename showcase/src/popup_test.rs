use super::*;

#[test]
fn popup_starts_hidden_and_empty() {
    let popup = Popup::new();
    assert_eq!(popup.visibility(), Visibility::Hidden);
    assert_eq!(popup.source(), "");
    assert_eq!(popup.aria_hidden(), "true");
}

#[test]
fn open_shows_source() {
    let mut popup = Popup::new();
    popup.open("/art/dawn.jpg");
    assert!(popup.is_shown());
    assert_eq!(popup.source(), "/art/dawn.jpg");
    assert_eq!(popup.aria_hidden(), "false");
}

#[test]
fn open_then_close_clears_source() {
    let mut popup = Popup::new();
    popup.open("/art/dawn.jpg");
    popup.close();
    assert_eq!(popup.visibility(), Visibility::Hidden);
    assert_eq!(popup.source(), "");
    assert_eq!(popup.aria_hidden(), "true");
}

#[test]
fn open_while_shown_replaces_source() {
    let mut popup = Popup::new();
    popup.open("/art/dawn.jpg");
    popup.open("/art/dusk.jpg");
    assert_eq!(popup.source(), "/art/dusk.jpg");
}

#[test]
fn close_when_hidden_is_harmless() {
    let mut popup = Popup::new();
    popup.close();
    assert_eq!(popup, Popup::new());
}
