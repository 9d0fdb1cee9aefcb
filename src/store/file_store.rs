//! File-based token storage.
//!
//! Stores each key as a JSON file in a directory. The closest desktop
//! equivalent of a browser's local storage: survives restarts, holds a
//! handful of small values.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::SessionError;

use super::storage::TokenStorage;

/// One persisted value with the time it was last written.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredEntry {
    value: String,
    updated_at: DateTime<Utc>,
}

/// File-based token storage.
///
/// Each key is stored as a JSON file named `{key}.json` in the configured
/// directory. Keys are restricted to ASCII alphanumerics and `_` so a key
/// can never escape the directory.
///
/// # Example
///
/// ```rust,ignore
/// use vestibule::store::FileStorage;
///
/// let storage = FileStorage::new("/var/lib/myapp/session")?;
/// ```
pub struct FileStorage {
    directory: PathBuf,
}

impl FileStorage {
    /// Creates a new file storage.
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let dir = directory.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            SessionError::StorageUnavailable(format!("Failed to create storage directory: {e}"))
        })?;
        Ok(Self { directory: dir })
    }

    /// Returns the path for a storage key.
    fn entry_path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{key}.json"))
    }

    /// A key must not be able to name a path outside the directory.
    fn is_valid_key(key: &str) -> bool {
        !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    /// Reads an entry from its file.
    fn read_entry(&self, key: &str) -> Result<Option<StoredEntry>, SessionError> {
        let path = self.entry_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            SessionError::StorageUnavailable(format!("Failed to read storage file: {e}"))
        })?;

        let entry: StoredEntry = serde_json::from_str(&content).map_err(|e| {
            SessionError::StorageUnavailable(format!("Failed to parse storage file: {e}"))
        })?;

        Ok(Some(entry))
    }

    /// Writes an entry to its file.
    fn write_entry(&self, key: &str, entry: &StoredEntry) -> Result<(), SessionError> {
        let path = self.entry_path(key);

        let content = serde_json::to_string_pretty(entry).map_err(|e| {
            SessionError::StorageUnavailable(format!("Failed to serialize storage entry: {e}"))
        })?;

        std::fs::write(&path, content).map_err(|e| {
            SessionError::StorageUnavailable(format!("Failed to write storage file: {e}"))
        })?;

        Ok(())
    }
}

impl TokenStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        if !Self::is_valid_key(key) {
            return Ok(None);
        }

        Ok(self.read_entry(key)?.map(|entry| entry.value))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        if !Self::is_valid_key(key) {
            return Err(SessionError::StorageUnavailable(format!(
                "Invalid storage key: {key:?}"
            )));
        }

        let entry = StoredEntry {
            value: value.to_owned(),
            updated_at: Utc::now(),
        };
        self.write_entry(key, &entry)
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        if !Self::is_valid_key(key) {
            return Ok(());
        }

        let path = self.entry_path(key);
        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| {
                SessionError::StorageUnavailable(format!("Failed to delete storage file: {e}"))
            })?;
        }

        Ok(())
    }
}
