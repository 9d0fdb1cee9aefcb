//! User profile lookup and maintenance.
//!
//! The profile API is a collaborator: this crate defines the
//! [`ProfileClient`] trait plus the wire types, and the profile guard
//! consumes whatever implementation the application injects.
//!
//! # Implementations
//!
//! | Type | Description |
//! |------|-------------|
//! | [`HttpProfileClient`] | reqwest-backed client (feature `http-client`) |
//! | [`MockProfileClient`] | scripted in-memory client (feature `mocks`) |

#[cfg(feature = "http-client")]
mod http;
#[cfg(any(test, feature = "mocks"))]
mod mock;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(feature = "http-client")]
pub use http::HttpProfileClient;
#[cfg(any(test, feature = "mocks"))]
pub use mock::MockProfileClient;

use crate::SessionError;

/// A user's profile record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
}

impl UserProfile {
    /// A profile counts as complete when both names are present and
    /// non-empty. An empty string is as incomplete as a missing field.
    pub fn is_complete(&self) -> bool {
        self.first_name.as_deref().is_some_and(|name| !name.is_empty())
            && self.last_name.as_deref().is_some_and(|name| !name.is_empty())
    }
}

/// Fields for creating a profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
}

/// Profile API operations.
#[async_trait]
pub trait ProfileClient: Send + Sync {
    /// Fetches the profile belonging to `email`.
    ///
    /// # Errors
    ///
    /// - [`SessionError::ProfileNotFound`] - no profile exists for the email
    /// - [`SessionError::ProfileLookupFailed`] - the lookup itself failed
    async fn get_profile_by_email(&self, email: &str) -> Result<UserProfile, SessionError>;

    /// Creates a new profile.
    async fn create_profile(&self, request: &ProfileRequest) -> Result<UserProfile, SessionError>;

    /// Updates an existing profile. `profile.id` must be set.
    async fn update_profile(&self, profile: &UserProfile) -> Result<UserProfile, SessionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(first: Option<&str>, last: Option<&str>) -> UserProfile {
        UserProfile {
            id: Some(1),
            email: "user@example.com".to_owned(),
            first_name: first.map(ToOwned::to_owned),
            last_name: last.map(ToOwned::to_owned),
            birth_date: None,
        }
    }

    #[test]
    fn test_complete_profile() {
        assert!(profile(Some("Ada"), Some("Lovelace")).is_complete());
    }

    #[test]
    fn test_missing_names_incomplete() {
        assert!(!profile(None, None).is_complete());
        assert!(!profile(Some("Ada"), None).is_complete());
        assert!(!profile(None, Some("Lovelace")).is_complete());
    }

    #[test]
    fn test_empty_string_names_incomplete() {
        assert!(!profile(Some(""), Some("Lovelace")).is_complete());
        assert!(!profile(Some("Ada"), Some("")).is_complete());
    }

    #[test]
    fn test_profile_wire_names_are_camel_case() {
        let json = serde_json::to_value(profile(Some("Ada"), Some("Lovelace"))).unwrap();

        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn test_profile_deserializes_partial_record() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"email":"user@example.com","firstName":"Ada"}"#).unwrap();

        assert_eq!(profile.first_name.as_deref(), Some("Ada"));
        assert_eq!(profile.last_name, None);
        assert!(!profile.is_complete());
    }

    #[test]
    fn test_birth_date_parses_iso_date() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"email":"user@example.com","birthDate":"1990-04-02"}"#,
        )
        .unwrap();

        assert_eq!(
            profile.birth_date,
            NaiveDate::from_ymd_opt(1990, 4, 2)
        );
    }
}
