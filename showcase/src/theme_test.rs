use super::*;
use crate::store::{MemoryStore, StoreError};

/// Store whose writes always fail, for exercising the warn path.
struct ReadOnlyStore {
    value: Option<String>,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<String> {
        self.value.clone()
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

fn store_with(value: &str) -> MemoryStore {
    let mut store = MemoryStore::new();
    store.set(THEME_STORAGE_KEY, value).expect("memory writes succeed");
    store
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn from_stored_only_accepts_light() {
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("LIGHT")), Theme::Dark);
    assert_eq!(Theme::from_stored(None), Theme::Dark);
}

#[test]
fn glyphs_differ_per_mode() {
    assert_eq!(Theme::Dark.glyph(), DARK_MODE_GLYPH);
    assert_eq!(Theme::Light.glyph(), LIGHT_MODE_GLYPH);
    assert_ne!(Theme::Dark.glyph(), Theme::Light.glyph());
}

// =============================================================
// ThemeController
// =============================================================

#[test]
fn empty_store_initializes_dark_with_dark_glyph() {
    let theme = ThemeController::initialize(MemoryStore::new());
    assert_eq!(theme.mode(), Theme::Dark);
    assert_eq!(theme.glyph(), DARK_MODE_GLYPH);
}

#[test]
fn stored_light_initializes_light() {
    let theme = ThemeController::initialize(store_with("light"));
    assert_eq!(theme.mode(), Theme::Light);
    assert_eq!(theme.glyph(), LIGHT_MODE_GLYPH);
}

#[test]
fn toggle_persists_light_and_updates_glyph() {
    let mut theme = ThemeController::initialize(MemoryStore::new());
    assert_eq!(theme.toggle(), Theme::Light);
    assert_eq!(theme.glyph(), LIGHT_MODE_GLYPH);
    assert_eq!(theme.store().get(THEME_STORAGE_KEY).as_deref(), Some("light"));
}

#[test]
fn toggle_twice_restores_absent_preference() {
    let mut theme = ThemeController::initialize(MemoryStore::new());
    theme.toggle();
    assert_eq!(theme.toggle(), Theme::Dark);
    assert_eq!(theme.glyph(), DARK_MODE_GLYPH);
    assert_eq!(theme.store().get(THEME_STORAGE_KEY), None);
}

#[test]
fn toggle_twice_restores_light_preference() {
    let mut theme = ThemeController::initialize(store_with("light"));
    theme.toggle();
    assert_eq!(theme.store().get(THEME_STORAGE_KEY), None);
    theme.toggle();
    assert_eq!(theme.store().get(THEME_STORAGE_KEY).as_deref(), Some("light"));
}

#[test]
fn glyph_always_matches_mode_across_toggles() {
    let mut theme = ThemeController::initialize(MemoryStore::new());
    for _ in 0..5 {
        let mode = theme.toggle();
        assert_eq!(theme.glyph(), mode.glyph());
        assert_eq!(theme.mode(), mode);
    }
}

#[test]
fn failed_write_still_flips_mode() {
    let mut theme = ThemeController::initialize(ReadOnlyStore { value: None });
    assert_eq!(theme.toggle(), Theme::Light);
    assert_eq!(theme.mode(), Theme::Light);
}
