pub mod account;
pub mod actions;
pub mod config;
pub mod events;
pub mod guards;
pub mod interceptors;
pub mod navigator;
pub mod profile;
pub mod secret;
pub mod session;
pub mod store;
pub mod token;

pub use account::AccountClient;
pub use account::AccountRequest;
pub use account::AccountResponse;
pub use account::Credentials;
pub use account::LoginResponse;
pub use config::SessionConfig;
pub use events::Listener;
pub use events::SessionEvent;
pub use navigator::Navigator;
pub use profile::ProfileClient;
pub use profile::ProfileRequest;
pub use profile::UserProfile;
pub use secret::SecretString;
pub use session::SessionSnapshot;
pub use session::SessionState;
pub use store::FileStorage;
pub use store::InMemoryStorage;
pub use store::TokenStorage;
pub use store::TokenStore;
pub use token::Claims;

#[cfg(feature = "http-client")]
pub use account::HttpAccountClient;
#[cfg(feature = "http-client")]
pub use profile::HttpProfileClient;

#[cfg(any(test, feature = "mocks"))]
pub use account::MockAccountClient;
#[cfg(any(test, feature = "mocks"))]
pub use navigator::RecordingNavigator;
#[cfg(any(test, feature = "mocks"))]
pub use profile::MockProfileClient;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    MalformedToken,
    StorageUnavailable(String),
    ProfileNotFound,
    ProfileLookupFailed(String),
    InvalidCredentials,
    AuthorizationDenied,
    Transport(String),
}

impl std::error::Error for SessionError {}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::MalformedToken => write!(f, "Token is malformed"),
            SessionError::StorageUnavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            SessionError::ProfileNotFound => write!(f, "Profile not found"),
            SessionError::ProfileLookupFailed(msg) => write!(f, "Profile lookup failed: {}", msg),
            SessionError::InvalidCredentials => write!(f, "Invalid email or password"),
            SessionError::AuthorizationDenied => write!(f, "Authorization denied"),
            SessionError::Transport(msg) => write!(f, "Transport error: {}", msg),
        }
    }
}
