//! Preference store errors.

use std::path::PathBuf;

/// Error returned by the fallible [`FileStore`](super::FileStore) operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file could not be read or written
    #[error("failed to access preference file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The backing file does not hold a JSON object of strings
    #[error("malformed preference file '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
