//! Token storage: the durable KV abstraction and the in-process store.
//!
//! [`TokenStore`] is the single source of truth for the session token.
//! It keeps the current value in memory, mirrors every change into a
//! [`TokenStorage`] backend, and notifies subscribed listeners. Reads are
//! synchronous and never touch the backend.
//!
//! # Example
//!
//! ```rust
//! use vestibule::{InMemoryStorage, TokenStore};
//!
//! let store = TokenStore::new(InMemoryStorage::new());
//! assert_eq!(store.current(), None);
//!
//! store.store("header.payload.signature");
//! assert_eq!(store.current(), Some("header.payload.signature".to_owned()));
//!
//! store.clear();
//! assert_eq!(store.current(), None);
//! ```

mod file_store;
mod memory_store;
mod storage;

use std::sync::{Arc, RwLock};

use chrono::Utc;

pub use file_store::FileStorage;
pub use memory_store::InMemoryStorage;
pub use storage::TokenStorage;

use crate::config::{SessionConfig, DEFAULT_STORAGE_KEY};
use crate::events::{Listener, SessionEvent};
use crate::token;

/// The in-process session token store.
///
/// Clones share the same state, so one store can be handed to the session
/// state, the guards and the interceptors and they all observe the same
/// token.
///
/// Mutations persist to the storage backend before returning. A backend
/// failure is logged and swallowed: the in-memory value stays
/// authoritative for the lifetime of the process.
pub struct TokenStore<S: TokenStorage> {
    token: Arc<RwLock<Option<String>>>,
    listeners: Arc<RwLock<Vec<Arc<dyn Listener>>>>,
    storage: Arc<S>,
    key: String,
}

impl<S: TokenStorage> Clone for TokenStore<S> {
    fn clone(&self) -> Self {
        Self {
            token: Arc::clone(&self.token),
            listeners: Arc::clone(&self.listeners),
            storage: Arc::clone(&self.storage),
            key: self.key.clone(),
        }
    }
}

impl<S: TokenStorage> TokenStore<S> {
    /// Creates a store over `storage` using the default key (`"jwt_token"`).
    ///
    /// Any token already persisted under the key becomes the initial
    /// in-memory value, so a restart resumes the previous session. A failed
    /// read is logged and treated as "no token".
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    /// Creates a store using the storage key from `config`.
    pub fn with_config(storage: S, config: &SessionConfig) -> Self {
        Self::with_key(storage, config.storage_key.clone())
    }

    /// Creates a store using a custom storage key.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();

        let initial = match storage.get(&key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!(
                    target: "vestibule_session",
                    "msg=\"failed to load persisted token\", key=\"{key}\", error=\"{err}\""
                );
                None
            }
        };

        Self {
            token: Arc::new(RwLock::new(initial)),
            listeners: Arc::new(RwLock::new(Vec::new())),
            storage: Arc::new(storage),
            key,
        }
    }

    /// Returns the current token, if any.
    pub fn current(&self) -> Option<String> {
        self.token.read().map(|guard| guard.clone()).unwrap_or(None)
    }

    /// Sets the current token and persists it.
    ///
    /// The in-memory value and the durable copy are both updated before
    /// this returns; subscribed listeners run last, after both writes.
    pub fn store(&self, token: impl Into<String>) {
        let token = token.into();

        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.clone());
        }

        if let Err(err) = self.storage.set(&self.key, &token) {
            log::warn!(
                target: "vestibule_session",
                "msg=\"token persistence failed, keeping in-memory value\", error=\"{err}\""
            );
        }

        let claims = token::decode(&token);
        self.emit(SessionEvent::TokenStored {
            subject: claims.as_ref().and_then(|c| c.sub.clone()),
            expires_at: claims.as_ref().and_then(|c| c.expires_at()),
            at: Utc::now(),
        });
    }

    /// Clears the current token and removes the durable copy.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }

        if let Err(err) = self.storage.remove(&self.key) {
            log::warn!(
                target: "vestibule_session",
                "msg=\"failed to remove persisted token\", error=\"{err}\""
            );
        }

        self.emit(SessionEvent::TokenCleared { at: Utc::now() });
    }

    /// Subscribes a listener to this store's events.
    pub fn subscribe(&self, listener: impl Listener) {
        if let Ok(mut guard) = self.listeners.write() {
            guard.push(Arc::new(listener));
        }
    }

    /// Notifies every subscribed listener.
    pub(crate) fn emit(&self, event: SessionEvent) {
        let listeners: Vec<Arc<dyn Listener>> = self
            .listeners
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default();

        for listener in listeners {
            listener.handle(&event);
        }
    }
}
