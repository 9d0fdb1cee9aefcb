#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::SessionError;

use super::{ProfileClient, ProfileRequest, UserProfile};

/// Scripted in-memory profile client.
///
/// Seed it with profiles, or set `fail_with` to make every call return
/// that error.
#[derive(Clone, Default)]
pub struct MockProfileClient {
    pub profiles: Arc<Mutex<Vec<UserProfile>>>,
    pub fail_with: Arc<Mutex<Option<SessionError>>>,
}

impl MockProfileClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client already holding `profile`.
    pub fn with_profile(profile: UserProfile) -> Self {
        let client = Self::new();
        client.profiles.lock().unwrap().push(profile);
        client
    }

    /// Makes every subsequent call fail with `error`.
    pub fn fail_with(&self, error: SessionError) {
        *self.fail_with.lock().unwrap() = Some(error);
    }

    fn scripted_failure(&self) -> Option<SessionError> {
        self.fail_with.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileClient for MockProfileClient {
    async fn get_profile_by_email(&self, email: &str) -> Result<UserProfile, SessionError> {
        if let Some(err) = self.scripted_failure() {
            return Err(err);
        }

        self.profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.email == email)
            .cloned()
            .ok_or(SessionError::ProfileNotFound)
    }

    async fn create_profile(&self, request: &ProfileRequest) -> Result<UserProfile, SessionError> {
        if let Some(err) = self.scripted_failure() {
            return Err(err);
        }

        let mut profiles = self.profiles.lock().unwrap();
        let profile = UserProfile {
            id: Some(profiles.len() as i64 + 1),
            email: request.email.clone(),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            birth_date: request.birth_date,
        };
        profiles.push(profile.clone());

        Ok(profile)
    }

    async fn update_profile(&self, profile: &UserProfile) -> Result<UserProfile, SessionError> {
        if let Some(err) = self.scripted_failure() {
            return Err(err);
        }

        let mut profiles = self.profiles.lock().unwrap();
        match profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(existing) => {
                *existing = profile.clone();
                Ok(profile.clone())
            }
            None => Err(SessionError::ProfileNotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_profile_by_email() {
        let client = MockProfileClient::with_profile(UserProfile {
            id: Some(1),
            email: "user@example.com".to_owned(),
            first_name: Some("Ada".to_owned()),
            last_name: Some("Lovelace".to_owned()),
            birth_date: None,
        });

        let profile = client.get_profile_by_email("user@example.com").await.unwrap();
        assert_eq!(profile.first_name.as_deref(), Some("Ada"));

        let missing = client.get_profile_by_email("other@example.com").await;
        assert_eq!(missing, Err(SessionError::ProfileNotFound));
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let client = MockProfileClient::new();

        let created = client
            .create_profile(&ProfileRequest {
                email: "user@example.com".to_owned(),
                first_name: Some("Ada".to_owned()),
                last_name: None,
                birth_date: None,
            })
            .await
            .unwrap();

        assert_eq!(created.id, Some(1));
        assert_eq!(client.profiles.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_replaces_matching_id() {
        let client = MockProfileClient::with_profile(UserProfile {
            id: Some(1),
            email: "user@example.com".to_owned(),
            first_name: None,
            last_name: None,
            birth_date: None,
        });

        let updated = client
            .update_profile(&UserProfile {
                id: Some(1),
                email: "user@example.com".to_owned(),
                first_name: Some("Ada".to_owned()),
                last_name: Some("Lovelace".to_owned()),
                birth_date: None,
            })
            .await
            .unwrap();

        assert!(updated.is_complete());
        let stored = client.get_profile_by_email("user@example.com").await.unwrap();
        assert!(stored.is_complete());
    }

    #[tokio::test]
    async fn test_scripted_failure() {
        let client = MockProfileClient::new();
        client.fail_with(SessionError::ProfileLookupFailed("scripted".to_owned()));

        let result = client.get_profile_by_email("user@example.com").await;
        assert_eq!(
            result,
            Err(SessionError::ProfileLookupFailed("scripted".to_owned()))
        );
    }
}
