//! Account API: login and registration.
//!
//! Defines the [`AccountClient`] collaborator trait plus the request and
//! response types of the account service. The login endpoint is the only
//! producer of session tokens; everything else in this crate just carries
//! the token around.
//!
//! # Implementations
//!
//! | Type | Description |
//! |------|-------------|
//! | [`HttpAccountClient`] | reqwest-backed client (feature `http-client`) |
//! | [`MockAccountClient`] | scripted in-memory client (feature `mocks`) |

#[cfg(feature = "http-client")]
mod http;
#[cfg(any(test, feature = "mocks"))]
mod mock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "http-client")]
pub use http::HttpAccountClient;
#[cfg(any(test, feature = "mocks"))]
pub use mock::MockAccountClient;

use crate::{SecretString, SessionError};

/// Login credentials.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<SecretString>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Fields for creating an account.
#[derive(Debug, Clone, Serialize)]
pub struct AccountRequest {
    pub email: String,
    pub password: SecretString,
}

impl AccountRequest {
    pub fn new(email: impl Into<String>, password: impl Into<SecretString>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Successful login payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// The session token. Redacted in debug output; the raw value goes
    /// straight into the token store.
    pub token: SecretString,
}

/// A created or fetched account record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Account API operations.
#[async_trait]
pub trait AccountClient: Send + Sync {
    /// Exchanges credentials for a session token.
    ///
    /// # Errors
    ///
    /// - [`SessionError::InvalidCredentials`] - the server rejected the login
    /// - [`SessionError::Transport`] - the request itself failed
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, SessionError>;

    /// Creates a new account. Does not log the new account in.
    async fn create_account(&self, request: &AccountRequest)
        -> Result<AccountResponse, SessionError>;
}
