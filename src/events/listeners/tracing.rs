use crate::events::{Listener, SessionEvent};

/// Emits session events as tracing events.
///
/// Requires the `tracing` feature to be enabled.
///
/// # Example
///
/// ```rust,ignore
/// use vestibule::events::listeners::TracingListener;
/// use vestibule::{InMemoryStorage, TokenStore};
///
/// let store = TokenStore::new(InMemoryStorage::new());
/// store.subscribe(TracingListener);
/// ```
pub struct TracingListener;

impl Listener for TracingListener {
    fn handle(&self, event: &SessionEvent) {
        tracing::info!(
            target: "vestibule::events",
            event_name = event.name(),
            ?event,
            "session event"
        );
    }
}
