#![cfg(not(feature = "csr"))]

use showcase::consts::THEME_STORAGE_KEY;
use showcase::theme::ThemeController;

use super::*;

#[test]
fn browser_store_is_unavailable_outside_the_browser() {
    assert!(BrowserStore::open().is_none());
}

#[test]
fn open_falls_back_to_memory() {
    let store = ThemeStore::open();
    assert!(!store.is_persistent());
    assert_eq!(store.get(THEME_STORAGE_KEY), None);
}

#[test]
fn fallback_store_keeps_toggles_for_the_page() {
    let mut theme = ThemeController::initialize(ThemeStore::open());
    assert_eq!(theme.toggle(), Theme::Light);
    assert_eq!(theme.store().get(THEME_STORAGE_KEY).as_deref(), Some("light"));
    assert_eq!(theme.toggle(), Theme::Dark);
    assert_eq!(theme.store().get(THEME_STORAGE_KEY), None);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
