//! File-backed preference store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::{decode, PreferenceStore, StoreError, DEFAULT_STORAGE_KEY};
use crate::mode::ThemeMode;

/// A preference store persisted as a JSON object on disk.
///
/// The file mirrors a local-storage area: a flat object whose entries are
/// strings, e.g. `{"darkMode": "dark"}`. Entries other than the configured
/// key are preserved on every write.
///
/// Through [`PreferenceStore`] all failures are logged and swallowed: an
/// unreadable or malformed file reads as "no preference", and a failed
/// write leaves the page state untouched. Use [`FileStore::load`] and
/// [`FileStore::save`] directly when the error matters.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    key: String,
}

impl FileStore {
    /// Creates a store at `path` using the default key.
    ///
    /// The file is not touched until the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    /// Uses `key` instead of the default key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads every entry from disk.
    ///
    /// A missing file is an empty object.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON object.
    pub fn load(&self) -> Result<Map<String, Value>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&content).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    /// Writes every entry to disk, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, entries: &Map<String, Value>) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let json = serde_json::to_string_pretty(entries).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(io_err)
    }

    /// Applies `update` to the on-disk entries and writes them back.
    fn modify(&self, update: impl FnOnce(&mut Map<String, Value>)) -> Result<(), StoreError> {
        let mut entries = self.load()?;
        update(&mut entries);
        self.save(&entries)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self) -> Option<ThemeMode> {
        let entries = match self.load() {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(%err, "reading theme preference failed");
                return None;
            }
        };
        decode(&self.key, entries.get(&self.key).and_then(Value::as_str))
    }

    fn set(&mut self, mode: ThemeMode) {
        let key = self.key.clone();
        let result = self.modify(|entries| {
            entries.insert(key, Value::String(mode.as_str().to_string()));
        });
        if let Err(err) = result {
            tracing::warn!(%err, %mode, "persisting theme preference failed");
        }
    }

    fn clear(&mut self) {
        let result = self.modify(|entries| {
            entries.remove(&self.key);
        });
        if let Err(err) = result {
            tracing::warn!(%err, "clearing theme preference failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("prefs.json"))
    }

    #[test]
    fn test_missing_file_is_absent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get(), None);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_set_writes_json_object() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.set(ThemeMode::Dark);

        let raw = fs::read_to_string(store.path()).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!({ "darkMode": "dark" }));
        assert_eq!(store.get(), Some(ThemeMode::Dark));
    }

    #[test]
    fn test_new_handle_sees_persisted_value() {
        let dir = TempDir::new().unwrap();
        store_in(&dir).set(ThemeMode::Light);
        assert_eq!(store_in(&dir).get(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_clear_preserves_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"lang": "es", "darkMode": "dark"}"#).unwrap();

        let mut store = FileStore::new(&path);
        store.clear();

        let entries = store.load().unwrap();
        assert_eq!(entries.get("lang"), Some(&Value::String("es".into())));
        assert!(!entries.contains_key("darkMode"));
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/deeper/prefs.json"));
        store.set(ThemeMode::Dark);
        assert_eq!(store.get(), Some(ThemeMode::Dark));
    }

    #[test]
    fn test_corrupt_file_reads_as_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Json { .. })));
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_set_on_corrupt_file_leaves_it_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        let mut store = FileStore::new(&path);
        store.set(ThemeMode::Dark);
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
    }

    #[test]
    fn test_non_string_value_reads_as_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"darkMode": true}"#).unwrap();
        assert_eq!(FileStore::new(&path).get(), None);
    }

    #[test]
    fn test_custom_key() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir).with_key("theme");
        store.set(ThemeMode::Dark);

        let entries = store.load().unwrap();
        assert_eq!(entries.get("theme"), Some(&Value::String("dark".into())));
        assert_eq!(store_in(&dir).get(), None);
    }
}
