//! Event system for session lifecycle changes.
//!
//! Events are fired by the token store and the account actions. Listeners
//! are subscribed per store; if none are subscribed, emitting is a no-op.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vestibule::events::listeners::LoggingListener;
//! use vestibule::{InMemoryStorage, TokenStore};
//!
//! let store = TokenStore::new(InMemoryStorage::new());
//!
//! // subscribe listeners at startup
//! store.subscribe(LoggingListener::new());
//!
//! // token changes will now be logged
//! store.store("header.payload.signature");
//! ```
//!
//! # Custom Listeners
//!
//! Implement the [`Listener`] trait to create custom event handlers:
//!
//! ```rust,ignore
//! use vestibule::events::{Listener, SessionEvent};
//!
//! struct RevocationCounter;
//!
//! impl Listener for RevocationCounter {
//!     fn handle(&self, event: &SessionEvent) {
//!         if let SessionEvent::SessionRevoked { .. } = event {
//!             // increment a counter
//!         }
//!     }
//! }
//! ```

mod event;
mod listener;

pub mod listeners;

pub use event::SessionEvent;
pub use listener::Listener;
