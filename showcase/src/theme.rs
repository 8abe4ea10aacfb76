//! Light/dark theme controller.
//!
//! Dark is the default. Light is persisted as `"light"` under
//! [`THEME_STORAGE_KEY`]; returning to dark removes the key so the stored
//! preference is always `"light"` or absent.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{DARK_MODE_GLYPH, LIGHT_MODE_GLYPH, THEME_LIGHT_VALUE, THEME_STORAGE_KEY};
use crate::store::KeyValueStore;

/// Visual mode applied to the whole page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Interpret a stored preference. Anything other than `"light"` is dark.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(THEME_LIGHT_VALUE) => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub fn is_light(self) -> bool {
        self == Self::Light
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Indicator glyph for this mode.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Dark => DARK_MODE_GLYPH,
            Self::Light => LIGHT_MODE_GLYPH,
        }
    }
}

/// Owns the current mode and the store it persists to.
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    mode: Theme,
}

impl<S: KeyValueStore> ThemeController<S> {
    /// Read the persisted preference and adopt it.
    pub fn initialize(store: S) -> Self {
        let mode = Theme::from_stored(store.get(THEME_STORAGE_KEY).as_deref());
        log::debug!("theme: initialized to {}", mode.as_str());
        Self { store, mode }
    }

    /// Flip the mode, persist it and return the resulting mode.
    ///
    /// A failed write is logged and the in-page mode still flips.
    pub fn toggle(&mut self) -> Theme {
        self.mode = self.mode.flipped();
        let written = match self.mode {
            Theme::Light => self.store.set(THEME_STORAGE_KEY, THEME_LIGHT_VALUE),
            Theme::Dark => self.store.remove(THEME_STORAGE_KEY),
        };
        if let Err(e) = written {
            log::warn!("theme: failed to persist {}: {e}", self.mode.as_str());
        }
        log::debug!("theme: toggled to {}", self.mode.as_str());
        self.mode
    }

    #[must_use]
    pub fn mode(&self) -> Theme {
        self.mode
    }

    /// Glyph matching the applied mode.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        self.mode.glyph()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
