//! Derived session state.
//!
//! [`SessionState`] turns the raw token in a [`TokenStore`] into the facts
//! the rest of the application asks about: is anyone logged in, who, and
//! for how long. Nothing here is cached; every getter re-reads the store
//! and re-decodes, so the answers always reflect the current token.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::store::{TokenStorage, TokenStore};
use crate::token::{self, Claims};

/// All derived session facts in one value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    /// Token present and not yet expired.
    pub authenticated: bool,
    /// Subject (email) claim of the current token.
    pub subject_email: Option<String>,
    /// Expiration instant of the current token.
    pub expires_at: Option<DateTime<Utc>>,
    /// Whole minutes until expiration; negative once expired.
    pub minutes_remaining: Option<i64>,
}

/// Read-only view over a token store.
///
/// Holds a clone of the store, so it observes every `store`/`clear` made
/// through any other handle.
pub struct SessionState<S: TokenStorage> {
    store: TokenStore<S>,
}

impl<S: TokenStorage> Clone for SessionState<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: TokenStorage> SessionState<S> {
    /// Creates a session view over `store`.
    pub fn new(store: TokenStore<S>) -> Self {
        Self { store }
    }

    /// Returns the raw current token, if any.
    pub fn token(&self) -> Option<String> {
        self.store.current()
    }

    /// Returns the decoded claims of the current token, if it decodes.
    pub fn claims(&self) -> Option<Claims> {
        self.store.current().and_then(|t| token::decode(&t))
    }

    /// Returns true iff a token is present, decodes, and expires strictly
    /// in the future.
    ///
    /// Note the boundary: at `exp == now` this is already false, while
    /// [`is_token_expired`](Self::is_token_expired) is not yet true. Both
    /// treat a missing or malformed token as logged out.
    pub fn is_authenticated(&self) -> bool {
        self.claims()
            .and_then(|claims| claims.exp)
            .is_some_and(|exp| exp > Utc::now().timestamp())
    }

    /// Returns the subject (email) claim, if present.
    pub fn subject_email(&self) -> Option<String> {
        self.claims().and_then(|claims| claims.sub)
    }

    /// Returns the expiration instant of the current token.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.claims().and_then(|claims| claims.expires_at())
    }

    /// Returns whole minutes until expiration, floored toward negative
    /// infinity.
    ///
    /// A token expiring in 30 seconds yields `Some(0)`; one that expired
    /// 30 seconds ago yields `Some(-1)`. `None` when there is no
    /// decodable expiration.
    pub fn minutes_until_expiry(&self) -> Option<i64> {
        let expires_at = self.expires_at()?;
        let millis = expires_at
            .signed_duration_since(Utc::now())
            .num_milliseconds();
        Some(millis.div_euclid(60_000))
    }

    /// Returns true when the given token (or the stored one, when `None`)
    /// is past its expiration.
    ///
    /// Fails closed: no token, an undecodable token, or a missing `exp`
    /// all count as expired.
    pub fn is_token_expired(&self, token: Option<&str>) -> bool {
        let claims = match token {
            Some(t) => token::decode(t),
            None => self.claims(),
        };

        match claims {
            Some(claims) => claims.is_expired(),
            None => true,
        }
    }

    /// Returns every derived fact in one call.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            authenticated: self.is_authenticated(),
            subject_email: self.subject_email(),
            expires_at: self.expires_at(),
            minutes_remaining: self.minutes_until_expiry(),
        }
    }
}

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use chrono::Duration;

    use crate::store::InMemoryStorage;

    use super::*;

    fn make_token(email: &str, expires_in: Duration) -> String {
        let exp = (Utc::now() + expires_in).timestamp();
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(
            serde_json::json!({ "sub": email, "exp": exp, "iat": Utc::now().timestamp() })
                .to_string(),
        );
        format!("{header}.{payload}.signature")
    }

    fn session_with(token: Option<&str>) -> SessionState<InMemoryStorage> {
        let store = TokenStore::new(InMemoryStorage::new());
        if let Some(token) = token {
            store.store(token);
        }
        SessionState::new(store)
    }

    #[test]
    fn test_authenticated_with_future_expiry() {
        let token = make_token("user@example.com", Duration::hours(1));
        let session = session_with(Some(&token));

        assert!(session.is_authenticated());
    }

    #[test]
    fn test_not_authenticated_without_token() {
        let session = session_with(None);

        assert!(!session.is_authenticated());
        assert_eq!(session.subject_email(), None);
        assert_eq!(session.expires_at(), None);
        assert_eq!(session.minutes_until_expiry(), None);
    }

    #[test]
    fn test_not_authenticated_with_expired_token() {
        let token = make_token("user@example.com", Duration::hours(-1));
        let session = session_with(Some(&token));

        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_not_authenticated_with_malformed_token() {
        let session = session_with(Some("not-a-token"));

        assert!(!session.is_authenticated());
        assert_eq!(session.subject_email(), None);
    }

    #[test]
    fn test_subject_email() {
        let token = make_token("user@example.com", Duration::hours(1));
        let session = session_with(Some(&token));

        assert_eq!(session.subject_email(), Some("user@example.com".to_owned()));
    }

    #[test]
    fn test_expires_at_matches_claim() {
        let token = make_token("user@example.com", Duration::hours(1));
        let session = session_with(Some(&token));

        let expires_at = session.expires_at().unwrap();
        let delta = expires_at.signed_duration_since(Utc::now()).num_seconds();
        assert!(delta > 3_590 && delta <= 3_600, "delta was {delta}");
    }

    #[test]
    fn test_minutes_until_expiry_future() {
        let token = make_token("user@example.com", Duration::seconds(3_600));
        let session = session_with(Some(&token));

        let minutes = session.minutes_until_expiry().unwrap();
        assert!(minutes > 50 && minutes <= 60, "minutes was {minutes}");
    }

    #[test]
    fn test_minutes_until_expiry_past_is_negative() {
        let token = make_token("user@example.com", Duration::seconds(-3_600));
        let session = session_with(Some(&token));

        let minutes = session.minutes_until_expiry().unwrap();
        assert!((-61..-59).contains(&minutes), "minutes was {minutes}");
    }

    #[test]
    fn test_is_token_expired_explicit_token() {
        let fresh = make_token("user@example.com", Duration::hours(1));
        let stale = make_token("user@example.com", Duration::hours(-1));
        let session = session_with(None);

        assert!(!session.is_token_expired(Some(&fresh)));
        assert!(session.is_token_expired(Some(&stale)));
    }

    #[test]
    fn test_is_token_expired_falls_back_to_stored() {
        let stale = make_token("user@example.com", Duration::hours(-1));
        let session = session_with(Some(&stale));

        assert!(session.is_token_expired(None));
    }

    #[test]
    fn test_is_token_expired_fail_closed() {
        let session = session_with(None);

        assert!(session.is_token_expired(None));
        assert!(session.is_token_expired(Some("garbage")));
        assert!(session.is_token_expired(Some("a.e30.c")));
    }

    #[test]
    fn test_snapshot() {
        let token = make_token("user@example.com", Duration::hours(1));
        let session = session_with(Some(&token));

        let snapshot = session.snapshot();
        assert!(snapshot.authenticated);
        assert_eq!(snapshot.subject_email, Some("user@example.com".to_owned()));
        assert!(snapshot.expires_at.is_some());
        let minutes = snapshot.minutes_remaining.unwrap();
        assert!(minutes > 50 && minutes <= 60, "minutes was {minutes}");
    }

    #[test]
    fn test_state_observes_store_changes() {
        let store = TokenStore::new(InMemoryStorage::new());
        let session = SessionState::new(store.clone());

        assert!(!session.is_authenticated());

        store.store(make_token("user@example.com", Duration::hours(1)));
        assert!(session.is_authenticated());

        store.clear();
        assert!(!session.is_authenticated());
    }
}
