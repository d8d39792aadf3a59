//! Persisted theme preferences.
//!
//! This module provides:
//!
//! - [`PreferenceStore`]: the capability the controller reads and writes
//! - [`MemoryStore`]: a shared in-memory key/value store
//! - [`FileStore`]: a JSON file emulating browser local storage
//! - [`StoreError`]: failures from the fallible file operations
//!
//! Stores keep one entry under a fixed key whose value is `"dark"` or
//! `"light"`. A missing entry means the user never made an explicit choice.

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::mode::ThemeMode;

/// Key used when no other key is configured.
pub const DEFAULT_STORAGE_KEY: &str = "darkMode";

/// Read/write access to the user's explicit theme choice.
///
/// Every operation is total. Implementations backed by fallible media log
/// the failure and behave as if the entry were absent.
pub trait PreferenceStore {
    /// Returns the stored preference, or `None` if there is none.
    fn get(&self) -> Option<ThemeMode>;

    /// Persists `mode` as the explicit preference.
    fn set(&mut self, mode: ThemeMode);

    /// Removes the stored preference entirely.
    fn clear(&mut self);
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self) -> Option<ThemeMode> {
        (**self).get()
    }

    fn set(&mut self, mode: ThemeMode) {
        (**self).set(mode)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

/// Interprets a raw stored value.
///
/// Values other than `"dark"`/`"light"` are treated as absent.
pub(crate) fn decode(key: &str, raw: Option<&str>) -> Option<ThemeMode> {
    let raw = raw?;
    match raw.parse::<ThemeMode>() {
        Ok(mode) => Some(mode),
        Err(err) => {
            tracing::warn!(key, %err, "ignoring unrecognized stored theme preference");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_values() {
        assert_eq!(decode("k", Some("dark")), Some(ThemeMode::Dark));
        assert_eq!(decode("k", Some("light")), Some(ThemeMode::Light));
    }

    #[test]
    fn test_decode_absent_and_garbage() {
        assert_eq!(decode("k", None), None);
        assert_eq!(decode("k", Some("")), None);
        assert_eq!(decode("k", Some("true")), None);
    }

    #[test]
    fn test_boxed_store_delegates() {
        let shared = MemoryStore::new();
        let mut boxed: Box<dyn PreferenceStore> = Box::new(shared.clone());
        boxed.set(ThemeMode::Dark);
        assert_eq!(shared.get(), Some(ThemeMode::Dark));
        boxed.clear();
        assert_eq!(shared.get(), None);
    }
}
