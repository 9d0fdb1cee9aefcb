use super::SessionEvent;

/// Trait for handling session events.
///
/// Listeners run synchronously on the thread that mutated the token store,
/// so handlers should be fast: log, count, enqueue. Anything slow belongs
/// on the far side of a channel.
///
/// # Example
///
/// ```rust,ignore
/// use vestibule::events::{Listener, SessionEvent};
///
/// struct MetricsListener;
///
/// impl Listener for MetricsListener {
///     fn handle(&self, event: &SessionEvent) {
///         match event {
///             SessionEvent::LoginSucceeded { .. } => {
///                 // increment login success counter
///             }
///             SessionEvent::SessionRevoked { .. } => {
///                 // increment forced logout counter
///             }
///             _ => {}
///         }
///     }
/// }
/// ```
pub trait Listener: Send + Sync + 'static {
    /// Handle a session event.
    ///
    /// Called for every event emitted by the store the listener is
    /// subscribed to. Filter by matching on the event variant.
    fn handle(&self, event: &SessionEvent);
}
