use http::header::AUTHORIZATION;
use http::{HeaderMap, HeaderValue};

use crate::session::SessionState;
use crate::store::TokenStorage;

/// Attach `Authorization: Bearer <token>` to an outgoing request.
///
/// Returns `true` when a header was inserted. The header is only attached
/// when a token is present and not yet expired: sending a stale token would
/// just bounce with a 401, so the request goes out anonymous instead.
///
/// ## Example
///
/// ```rust,ignore
/// let mut headers = http::HeaderMap::new();
///
/// if attach_authorization(&mut headers, &session) {
///     // request is authenticated
/// }
/// ```
pub fn attach_authorization<S: TokenStorage>(
    headers: &mut HeaderMap,
    session: &SessionState<S>,
) -> bool {
    let Some(token) = session.token() else {
        log::debug!(target: "vestibule_session", "msg=\"no token available, sending request anonymously\"");
        return false;
    };

    if session.is_token_expired(Some(&token)) {
        log::debug!(target: "vestibule_session", "msg=\"token expired, sending request anonymously\"");
        return false;
    }

    let value = match HeaderValue::from_str(&format!("Bearer {token}")) {
        Ok(value) => value,
        Err(_) => {
            log::debug!(target: "vestibule_session", "msg=\"token is not a valid header value, sending request anonymously\"");
            return false;
        }
    };

    headers.insert(AUTHORIZATION, value);
    true
}
