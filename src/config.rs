//! Configuration types for the session library.
//!
//! Centralizes the storage key and the redirect paths that would otherwise
//! be scattered as string literals across the stores, guards and
//! interceptors.
//!
//! # Example
//!
//! ```rust
//! use vestibule::config::SessionConfig;
//!
//! // Use defaults
//! let config = SessionConfig::default();
//!
//! // Or customize
//! let config = SessionConfig::new()
//!     .with_storage_key("session_token")
//!     .with_login_path("/signin");
//! ```

/// Storage key under which the session token is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "jwt_token";

/// Where unauthenticated users are sent by the access guard.
pub const DEFAULT_LOGIN_PATH: &str = "/user-account/login";

/// Where users with an incomplete profile are sent by the profile guard.
pub const DEFAULT_PROFILE_COMPLETION_PATH: &str = "/user-profile/complete";

/// Where users are sent after a forced logout (unauthorized API response).
pub const DEFAULT_FORCED_LOGOUT_PATH: &str = "/login";

/// Configuration for the session token manager.
///
/// Use `SessionConfig::default()` for the stock key and paths, or the
/// `with_*` builders to override individual entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Key under which the token is stored in durable storage.
    ///
    /// Default: `"jwt_token"`
    pub storage_key: String,

    /// Redirect target for unauthenticated navigation.
    ///
    /// Default: `"/user-account/login"`
    pub login_path: String,

    /// Redirect target when the user's profile is incomplete.
    ///
    /// Default: `"/user-profile/complete"`
    pub profile_completion_path: String,

    /// Redirect target after an unauthorized (401) API response.
    ///
    /// Default: `"/login"`
    pub forced_logout_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            profile_completion_path: DEFAULT_PROFILE_COMPLETION_PATH.to_owned(),
            forced_logout_path: DEFAULT_FORCED_LOGOUT_PATH.to_owned(),
        }
    }
}

impl SessionConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the durable storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Overrides the login redirect path.
    #[must_use]
    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    /// Overrides the profile completion redirect path.
    #[must_use]
    pub fn with_profile_completion_path(mut self, path: impl Into<String>) -> Self {
        self.profile_completion_path = path.into();
        self
    }

    /// Overrides the forced logout redirect path.
    #[must_use]
    pub fn with_forced_logout_path(mut self, path: impl Into<String>) -> Self {
        self.forced_logout_path = path.into();
        self
    }
}
