//! Key-value persistence capability.
//!
//! The browser host backs this with `localStorage`; [`MemoryStore`] backs
//! tests and pages where storage is unavailable. Absent keys are not errors.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

/// Error returned by [`KeyValueStore`] writes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backing storage could not be reached.
    #[error("storage unavailable")]
    Unavailable,
    /// The backing storage refused the write (quota, privacy mode).
    #[error("storage rejected write for key {key}: {reason}")]
    Rejected { key: String, reason: String },
}

/// Origin-scoped string store.
pub trait KeyValueStore {
    /// Read `key`. `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backend refuses the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backend refuses the removal.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store that lives as long as the page.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}
