use crate::SessionError;

/// Durable key-value storage for the session token.
///
/// Implementations must be synchronous and cheap: the token store calls
/// them inline from [`TokenStore::store`](super::TokenStore::store) and
/// [`TokenStore::clear`](super::TokenStore::clear), and once at
/// construction to load the persisted token.
///
/// Errors from an implementation never abort a token mutation; the store
/// logs them and keeps its in-memory value authoritative.
pub trait TokenStorage: Send + Sync + 'static {
    /// Returns the stored value for `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Removes the value stored under `key`. Removing an absent key is not
    /// an error.
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}
