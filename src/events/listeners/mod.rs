//! Built-in event listeners.
//!
//! Subscribe them on a store with
//! [`TokenStore::subscribe`](crate::TokenStore::subscribe).

mod logging;
#[cfg(feature = "tracing")]
mod tracing;

pub use logging::LoggingListener;
#[cfg(feature = "tracing")]
pub use self::tracing::TracingListener;
