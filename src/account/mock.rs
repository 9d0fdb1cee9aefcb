#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{Duration, Utc};

use crate::SessionError;

use super::{AccountClient, AccountRequest, AccountResponse, Credentials, LoginResponse};

/// Issues a decodable three-segment token for `email`, expiring after
/// `valid_for`.
fn issue_token(email: &str, valid_for: Duration) -> String {
    let now = Utc::now();
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        serde_json::json!({
            "sub": email,
            "exp": (now + valid_for).timestamp(),
            "iat": now.timestamp(),
        })
        .to_string(),
    );
    format!("{header}.{payload}.mock-signature")
}

/// Scripted in-memory account client.
///
/// Seeded accounts log in successfully and receive a real, decodable
/// token (one hour validity by default). Everything else fails with
/// [`SessionError::InvalidCredentials`].
#[derive(Clone)]
pub struct MockAccountClient {
    pub accounts: Arc<Mutex<Vec<(String, String)>>>,
    pub token_validity: Arc<Mutex<Duration>>,
    pub token_override: Arc<Mutex<Option<String>>>,
}

impl MockAccountClient {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(Mutex::new(Vec::new())),
            token_validity: Arc::new(Mutex::new(Duration::hours(1))),
            token_override: Arc::new(Mutex::new(None)),
        }
    }

    /// Creates a client with one registered account.
    pub fn with_account(email: impl Into<String>, password: impl Into<String>) -> Self {
        let client = Self::new();
        client.register(email, password);
        client
    }

    /// Registers an account that can subsequently log in.
    pub fn register(&self, email: impl Into<String>, password: impl Into<String>) {
        self.accounts
            .lock()
            .unwrap()
            .push((email.into(), password.into()));
    }

    /// Changes how long issued tokens stay valid. Negative durations
    /// issue already-expired tokens.
    pub fn set_token_validity(&self, valid_for: Duration) {
        *self.token_validity.lock().unwrap() = valid_for;
    }

    /// Makes the next logins return exactly `token` instead of a minted one.
    pub fn set_token_override(&self, token: impl Into<String>) {
        *self.token_override.lock().unwrap() = Some(token.into());
    }
}

impl Default for MockAccountClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountClient for MockAccountClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, SessionError> {
        let accounts = self.accounts.lock().unwrap();
        let known = accounts.iter().any(|(email, password)| {
            email == &credentials.email && password == credentials.password.expose_secret()
        });
        drop(accounts);

        if !known {
            return Err(SessionError::InvalidCredentials);
        }

        let token = match self.token_override.lock().unwrap().clone() {
            Some(token) => token,
            None => issue_token(&credentials.email, *self.token_validity.lock().unwrap()),
        };

        Ok(LoginResponse {
            token: token.into(),
        })
    }

    async fn create_account(
        &self,
        request: &AccountRequest,
    ) -> Result<AccountResponse, SessionError> {
        let mut accounts = self.accounts.lock().unwrap();

        if accounts.iter().any(|(email, _)| email == &request.email) {
            return Err(SessionError::Transport("email already registered".to_owned()));
        }

        accounts.push((
            request.email.clone(),
            request.password.expose_secret().to_owned(),
        ));
        let id = accounts.len() as i64;
        drop(accounts);

        let now = Utc::now();
        Ok(AccountResponse {
            id,
            email: request.email.clone(),
            created_at: now,
            updated_at: now,
        })
    }
}
