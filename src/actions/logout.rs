use chrono::Utc;

use crate::events::SessionEvent;
use crate::store::{TokenStorage, TokenStore};

/// Logs the user out by clearing the token store.
///
/// Purely local: the server keeps no session state to tear down.
pub struct LogoutAction<S: TokenStorage> {
    store: TokenStore<S>,
}

impl<S: TokenStorage> LogoutAction<S> {
    pub fn new(store: TokenStore<S>) -> Self {
        LogoutAction { store }
    }

    /// Clears the in-memory token and its durable copy.
    ///
    /// Synchronous and infallible; a persistence failure is logged by the
    /// store and the session still ends.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "logout", skip_all))]
    pub fn execute(&self) {
        self.store.clear();
        self.store
            .emit(SessionEvent::LoggedOut { at: Utc::now() });

        log::info!(
            target: "vestibule_session",
            "msg=\"logout success\""
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::store::InMemoryStorage;

    use super::*;

    #[test]
    fn test_logout_clears_store() {
        let storage = InMemoryStorage::new();
        let store = TokenStore::new(storage.clone());
        store.store("a.b.c");

        let logout = LogoutAction::new(store.clone());
        logout.execute();

        assert_eq!(store.current(), None);
        assert_eq!(storage.get("jwt_token").unwrap(), None);
    }

    #[test]
    fn test_logout_without_session_is_harmless() {
        let store = TokenStore::new(InMemoryStorage::new());

        let logout = LogoutAction::new(store.clone());
        logout.execute();

        assert_eq!(store.current(), None);
    }
}
