use chrono::Utc;

use crate::account::{AccountClient, Credentials, LoginResponse};
use crate::events::SessionEvent;
use crate::profile::{ProfileClient, UserProfile};
use crate::store::{TokenStorage, TokenStore};
use crate::SessionError;

/// Logs a user in and stores the received token.
pub struct LoginAction<A: AccountClient, P: ProfileClient, S: TokenStorage> {
    accounts: A,
    profiles: P,
    store: TokenStore<S>,
}

impl<A: AccountClient, P: ProfileClient, S: TokenStorage> LoginAction<A, P, S> {
    pub fn new(accounts: A, profiles: P, store: TokenStore<S>) -> Self {
        LoginAction {
            accounts,
            profiles,
            store,
        }
    }

    /// Exchanges credentials for a token and stores it.
    ///
    /// On success the token is already persisted when this returns; the
    /// session is live immediately.
    ///
    /// # Returns
    ///
    /// - `Ok(response)` - logged in, token stored
    /// - `Err(InvalidCredentials)` - login rejected, session untouched
    /// - `Err(_)` - transport or API errors, session untouched
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "login", skip_all, err)
    )]
    pub async fn execute(&self, credentials: &Credentials) -> Result<LoginResponse, SessionError> {
        match self.accounts.login(credentials).await {
            Ok(response) => {
                self.store.store(response.token.expose_secret());

                self.store.emit(SessionEvent::LoginSucceeded {
                    email: credentials.email.clone(),
                    at: Utc::now(),
                });
                log::info!(
                    target: "vestibule_session",
                    "msg=\"login success\", email=\"{}\"",
                    credentials.email
                );

                Ok(response)
            }
            Err(err) => {
                self.store.emit(SessionEvent::LoginFailed {
                    email: credentials.email.clone(),
                    reason: err.to_string(),
                    at: Utc::now(),
                });
                log::warn!(
                    target: "vestibule_session",
                    "msg=\"login failed\", email=\"{}\", error=\"{err}\"",
                    credentials.email
                );

                Err(err)
            }
        }
    }

    /// Logs in, then fetches the user's profile with the fresh session.
    ///
    /// The token is stored before the profile lookup so the lookup runs
    /// authenticated. A failed or empty lookup does not fail the login;
    /// the profile comes back as `None` and the session stays live.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "login_with_profile", skip_all, err)
    )]
    pub async fn execute_with_profile(
        &self,
        credentials: &Credentials,
    ) -> Result<(LoginResponse, Option<UserProfile>), SessionError> {
        let response = self.execute(credentials).await?;

        let profile = match self.profiles.get_profile_by_email(&credentials.email).await {
            Ok(profile) => Some(profile),
            Err(err) => {
                log::debug!(
                    target: "vestibule_session",
                    "msg=\"profile fetch after login failed\", error=\"{err}\""
                );
                None
            }
        };

        Ok((response, profile))
    }
}

#[cfg(test)]
mod tests {
    use crate::account::MockAccountClient;
    use crate::profile::{MockProfileClient, ProfileRequest};
    use crate::store::InMemoryStorage;

    use super::*;

    fn login_action(
        accounts: MockAccountClient,
        profiles: MockProfileClient,
    ) -> (
        LoginAction<MockAccountClient, MockProfileClient, InMemoryStorage>,
        TokenStore<InMemoryStorage>,
    ) {
        let store = TokenStore::new(InMemoryStorage::new());
        let action = LoginAction::new(accounts, profiles, store.clone());
        (action, store)
    }

    #[tokio::test]
    async fn test_login_stores_token() {
        let accounts = MockAccountClient::with_account("user@example.com", "hunter2");
        let (action, store) = login_action(accounts, MockProfileClient::new());

        let response = action
            .execute(&Credentials::new("user@example.com", "hunter2"))
            .await
            .unwrap();

        assert_eq!(
            store.current().as_deref(),
            Some(response.token.expose_secret())
        );
    }

    #[tokio::test]
    async fn test_failed_login_leaves_store_empty() {
        let accounts = MockAccountClient::with_account("user@example.com", "hunter2");
        let (action, store) = login_action(accounts, MockProfileClient::new());

        let result = action
            .execute(&Credentials::new("user@example.com", "wrong"))
            .await;

        assert_eq!(result.err(), Some(SessionError::InvalidCredentials));
        assert_eq!(store.current(), None);
    }

    #[tokio::test]
    async fn test_login_with_profile_returns_profile() {
        let accounts = MockAccountClient::with_account("user@example.com", "hunter2");
        let profiles = MockProfileClient::new();
        profiles
            .create_profile(&ProfileRequest {
                email: "user@example.com".to_owned(),
                first_name: Some("Ada".to_owned()),
                last_name: Some("Lovelace".to_owned()),
                birth_date: None,
            })
            .await
            .unwrap();
        let (action, store) = login_action(accounts, profiles);

        let (_, profile) = action
            .execute_with_profile(&Credentials::new("user@example.com", "hunter2"))
            .await
            .unwrap();

        assert!(profile.unwrap().is_complete());
        assert!(store.current().is_some());
    }

    #[tokio::test]
    async fn test_login_with_profile_tolerates_missing_profile() {
        let accounts = MockAccountClient::with_account("user@example.com", "hunter2");
        let (action, store) = login_action(accounts, MockProfileClient::new());

        let (_, profile) = action
            .execute_with_profile(&Credentials::new("user@example.com", "hunter2"))
            .await
            .unwrap();

        // missing profile is not a login failure
        assert_eq!(profile, None);
        assert!(store.current().is_some());
    }

    #[tokio::test]
    async fn test_login_with_profile_tolerates_lookup_failure() {
        let accounts = MockAccountClient::with_account("user@example.com", "hunter2");
        let profiles = MockProfileClient::new();
        profiles.fail_with(SessionError::Transport("boom".to_owned()));
        let (action, store) = login_action(accounts, profiles);

        let result = action
            .execute_with_profile(&Credentials::new("user@example.com", "hunter2"))
            .await;

        assert!(result.unwrap().1.is_none());
        assert!(store.current().is_some());
    }
}
