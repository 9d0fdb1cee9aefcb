//! In-memory token storage.
//!
//! Suitable for tests and for environments without durable storage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::SessionError;

use super::storage::TokenStorage;

/// In-memory token storage.
///
/// Stores values in a `HashMap` protected by a `RwLock`. Clones share the
/// same map, so a handle kept by the caller observes writes made through
/// the token store.
///
/// # Note
///
/// Values are lost when the process exits. For persistence across
/// restarts, use [`FileStorage`](super::FileStorage).
#[derive(Clone)]
pub struct InMemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStorage {
    /// Creates a new in-memory storage.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns true if there are no entries stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStorage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| SessionError::StorageUnavailable("Lock poisoned".to_owned()))?;

        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries
            .write()
            .map_err(|_| SessionError::StorageUnavailable("Lock poisoned".to_owned()))?
            .insert(key.to_owned(), value.to_owned());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.entries
            .write()
            .map_err(|_| SessionError::StorageUnavailable("Lock poisoned".to_owned()))?
            .remove(key);

        Ok(())
    }
}
