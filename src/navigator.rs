//! Router integration point.
//!
//! Guards and the unauthorized interceptor redirect by calling into a
//! [`Navigator`] the application provides; the crate never owns a routing
//! table.

/// Issues a navigation to an application route.
///
/// Implementations are fire-and-forget: the caller does not learn whether
/// the navigation completed.
pub trait Navigator: Send + Sync {
    /// Navigates to `path`.
    fn navigate(&self, path: &str);
}

#[cfg(any(test, feature = "mocks"))]
mod recording {
    #![allow(clippy::unwrap_used)]

    use std::sync::{Arc, Mutex};

    use super::Navigator;

    /// Records navigations instead of performing them.
    #[derive(Clone, Default)]
    pub struct RecordingNavigator {
        pub visited: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingNavigator {
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns the most recent navigation target, if any.
        pub fn last(&self) -> Option<String> {
            self.visited.lock().unwrap().last().cloned()
        }

        /// Returns how many navigations were issued.
        pub fn count(&self) -> usize {
            self.visited.lock().unwrap().len()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.visited.lock().unwrap().push(path.to_owned());
        }
    }
}

#[cfg(any(test, feature = "mocks"))]
pub use recording::RecordingNavigator;
