//! Lightbox state for full-size panel images.

#[cfg(test)]
#[path = "popup_test.rs"]
mod popup_test;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

/// Popup visibility plus the image it displays.
///
/// `source` is empty whenever the popup is hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Popup {
    visibility: Visibility,
    source: String,
}

impl Popup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `source`. Opening while shown swaps the image.
    pub fn open(&mut self, source: &str) {
        self.source.clear();
        self.source.push_str(source);
        self.visibility = Visibility::Shown;
        log::debug!("popup: open {source}");
    }

    /// Hide and clear the image so the next open never flashes a stale one.
    pub fn close(&mut self) {
        if self.visibility == Visibility::Shown {
            log::debug!("popup: close");
        }
        self.visibility = Visibility::Hidden;
        self.source.clear();
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.visibility == Visibility::Shown
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Value for the overlay's `aria-hidden` attribute.
    #[must_use]
    pub fn aria_hidden(&self) -> &'static str {
        if self.is_shown() { "false" } else { "true" }
    }
}
