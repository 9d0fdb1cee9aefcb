use async_trait::async_trait;
use http::StatusCode;

use crate::SessionError;

use super::{ProfileClient, ProfileRequest, UserProfile};

/// Reqwest-backed profile client.
///
/// Talks to `{base_url}/api/user-profiles` in the shapes the profile
/// service exposes. Requires the `http-client` feature.
///
/// # Example
///
/// ```rust,ignore
/// use vestibule::profile::HttpProfileClient;
///
/// let client = HttpProfileClient::new("http://localhost:8080");
/// let profile = client.get_profile_by_email("user@example.com").await?;
/// ```
pub struct HttpProfileClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpProfileClient {
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

    fn profiles_url(&self) -> String {
        format!("{}/api/user-profiles", self.base_url)
    }

    async fn parse_profile(response: reqwest::Response) -> Result<UserProfile, SessionError> {
        response
            .json::<UserProfile>()
            .await
            .map_err(|err| SessionError::Transport(err.to_string()))
    }
}

#[async_trait]
impl ProfileClient for HttpProfileClient {
    async fn get_profile_by_email(&self, email: &str) -> Result<UserProfile, SessionError> {
        let url = format!("{}/email/{email}", self.profiles_url());

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| SessionError::Transport(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SessionError::ProfileNotFound);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(SessionError::AuthorizationDenied);
        }
        if !status.is_success() {
            return Err(SessionError::ProfileLookupFailed(format!(
                "unexpected status {status}"
            )));
        }

        Self::parse_profile(response).await
    }

    async fn create_profile(&self, request: &ProfileRequest) -> Result<UserProfile, SessionError> {
        let response = self
            .http
            .post(self.profiles_url())
            .json(request)
            .send()
            .await
            .map_err(|err| SessionError::Transport(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(SessionError::AuthorizationDenied);
        }
        if !status.is_success() {
            return Err(SessionError::Transport(format!(
                "unexpected status {status}"
            )));
        }

        Self::parse_profile(response).await
    }

    async fn update_profile(&self, profile: &UserProfile) -> Result<UserProfile, SessionError> {
        let response = self
            .http
            .put(self.profiles_url())
            .json(profile)
            .send()
            .await
            .map_err(|err| SessionError::Transport(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(SessionError::AuthorizationDenied);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(SessionError::ProfileNotFound);
        }
        if !status.is_success() {
            return Err(SessionError::Transport(format!(
                "unexpected status {status}"
            )));
        }

        Self::parse_profile(response).await
    }
}
