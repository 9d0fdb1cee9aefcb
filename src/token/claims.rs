use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims decoded from a token payload.
///
/// Every field is optional: the decoder accepts any JSON object and lets the
/// derived session state fail closed on whatever is missing. Unknown payload
/// fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - the user's email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Expiration time (Unix timestamp, seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Issued at time (Unix timestamp, seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Returns the subject (email) if present.
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref()
    }

    /// Returns the expiration as a UTC timestamp, if present and representable.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    /// Returns the issued-at as a UTC timestamp, if present and representable.
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.iat.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    /// Returns true if the expiration lies in the past.
    ///
    /// A missing `exp` counts as expired. Expiration exactly now is not
    /// expired; the cutoff is `exp < now`.
    pub fn is_expired(&self) -> bool {
        match self.exp {
            Some(exp) => exp < Utc::now().timestamp(),
            None => true,
        }
    }
}
