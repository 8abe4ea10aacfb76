//! Theme persistence and application.
//!
//! Backs the theme controller with `localStorage` and toggles the `light`
//! class on the `<html>` element. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! When `localStorage` is unavailable (privacy mode, native tests) the page
//! falls back to an in-memory store, so toggling still works for the
//! lifetime of the page and simply is not remembered.

#[cfg(test)]
#[path = "theme_store_test.rs"]
mod theme_store_test;

use showcase::store::{KeyValueStore, MemoryStore, StoreError};
use showcase::theme::Theme;

/// `localStorage` for the page origin.
pub struct BrowserStore {
    #[cfg(feature = "csr")]
    storage: web_sys::Storage,
}

impl BrowserStore {
    /// Open `localStorage`, or `None` when the browser denies it.
    pub fn open() -> Option<Self> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            Some(Self { storage })
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            self.storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            self.storage.set_item(key, value).map_err(|e| StoreError::Rejected {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            self.storage.remove_item(key).map_err(|e| StoreError::Rejected {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }
}

/// Store handed to the theme controller.
pub enum ThemeStore {
    Browser(BrowserStore),
    Memory(MemoryStore),
}

impl ThemeStore {
    /// `localStorage` when available, otherwise an in-memory fallback.
    pub fn open() -> Self {
        if let Some(store) = BrowserStore::open() {
            return Self::Browser(store);
        }
        log::warn!("theme: localStorage unavailable, preference will not persist");
        Self::Memory(MemoryStore::new())
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        matches!(self, Self::Browser(_))
    }
}

impl KeyValueStore for ThemeStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Browser(s) => s.get(key),
            Self::Memory(s) => s.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            Self::Browser(s) => s.set(key, value),
            Self::Memory(s) => s.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match self {
            Self::Browser(s) => s.remove(key),
            Self::Memory(s) => s.remove(key),
        }
    }
}

/// Apply `theme` to the document root.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        use showcase::consts::LIGHT_CLASS;

        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        if let Err(e) = root.class_list().toggle_with_force(LIGHT_CLASS, theme.is_light()) {
            log::warn!("theme: failed to apply {}: {e:?}", theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}
