use async_trait::async_trait;
use http::StatusCode;

use crate::SessionError;

use super::{AccountClient, AccountRequest, Credentials, LoginResponse};

/// Reqwest-backed account client.
///
/// Logs in against `{base_url}/api/auth/login` and creates accounts via
/// `{base_url}/api/users/create`. Requires the `http-client` feature.
pub struct HttpAccountClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpAccountClient {
    /// Creates a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Creates a client reusing an existing `reqwest::Client`.
    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            http,
        }
    }
}

#[async_trait]
impl AccountClient for HttpAccountClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, SessionError> {
        let url = format!("{}/api/auth/login", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(|err| SessionError::Transport(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(SessionError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(SessionError::Transport(format!(
                "unexpected status {status}"
            )));
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|err| SessionError::Transport(err.to_string()))
    }

    async fn create_account(
        &self,
        request: &AccountRequest,
    ) -> Result<super::AccountResponse, SessionError> {
        let url = format!("{}/api/users/create", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|err| SessionError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SessionError::Transport(format!(
                "unexpected status {status}"
            )));
        }

        response
            .json::<super::AccountResponse>()
            .await
            .map_err(|err| SessionError::Transport(err.to_string()))
    }
}
