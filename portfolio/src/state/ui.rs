#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use showcase::popup::Popup;
use showcase::theme::Theme;

/// Reactive page state mirrored from the behavior controllers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub theme: Theme,
    pub popup: Popup,
    pub active_slide: usize,
}

impl UiState {
    /// Glyph for the theme toggle button.
    #[must_use]
    pub fn theme_glyph(&self) -> &'static str {
        self.theme.glyph()
    }

    #[must_use]
    pub fn is_slide_active(&self, index: usize) -> bool {
        self.active_slide == index
    }

    /// Popup overlay class list.
    #[must_use]
    pub fn popup_class(&self) -> &'static str {
        if self.popup.is_shown() {
            "img-popup show"
        } else {
            "img-popup"
        }
    }
}
