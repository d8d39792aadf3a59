//! In-memory preference store.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::{decode, PreferenceStore, DEFAULT_STORAGE_KEY};
use crate::mode::ThemeMode;

/// A key/value store living in memory, shaped like browser local storage.
///
/// Clones share the same entries, so a test can keep one handle while the
/// controller owns another.
///
/// # Example
///
/// ```rust
/// use themeswitch::{MemoryStore, PreferenceStore, ThemeMode};
///
/// let store = MemoryStore::new();
/// let mut owned = store.clone();
/// owned.set(ThemeMode::Dark);
///
/// assert_eq!(store.get(), Some(ThemeMode::Dark));
/// assert_eq!(store.raw("darkMode").as_deref(), Some("dark"));
/// ```
#[derive(Debug, Clone)]
pub struct MemoryStore {
    key: String,
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    /// Creates an empty store using the default key.
    pub fn new() -> Self {
        Self::with_key(DEFAULT_STORAGE_KEY)
    }

    /// Creates an empty store that keeps the preference under `key`.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: Rc::new(RefCell::new(BTreeMap::new())),
        }
    }

    /// Creates a store already holding `mode`.
    pub fn with_preference(mode: ThemeMode) -> Self {
        let mut store = Self::new();
        store.set(mode);
        store
    }

    /// Returns the raw value stored under `key`, if any.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Writes a raw value, bypassing mode encoding.
    pub fn set_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.borrow_mut().insert(key.into(), value.into());
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self) -> Option<ThemeMode> {
        let entries = self.entries.borrow();
        decode(&self.key, entries.get(&self.key).map(String::as_str))
    }

    fn set(&mut self, mode: ThemeMode) {
        self.entries
            .borrow_mut()
            .insert(self.key.clone(), mode.as_str().to_string());
    }

    fn clear(&mut self) {
        self.entries.borrow_mut().remove(&self.key);
    }
}
