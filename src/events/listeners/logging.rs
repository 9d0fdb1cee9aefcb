use crate::events::{Listener, SessionEvent};

/// Logs all session events using the `log` crate.
///
/// # Example
///
/// ```rust,ignore
/// use vestibule::events::listeners::LoggingListener;
/// use vestibule::{InMemoryStorage, TokenStore};
///
/// let store = TokenStore::new(InMemoryStorage::new());
/// store.subscribe(LoggingListener::new());
/// ```
pub struct LoggingListener {
    level: log::Level,
}

impl LoggingListener {
    /// Creates a new logging listener at INFO level.
    pub fn new() -> Self {
        Self {
            level: log::Level::Info,
        }
    }

    /// Creates a new logging listener at the specified level.
    pub fn with_level(level: log::Level) -> Self {
        Self { level }
    }
}

impl Default for LoggingListener {
    fn default() -> Self {
        Self::new()
    }
}

impl Listener for LoggingListener {
    fn handle(&self, event: &SessionEvent) {
        log::log!(
            target: "vestibule::events",
            self.level,
            "event={} {:?}",
            event.name(),
            event
        );
    }
}
