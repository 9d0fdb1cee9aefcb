use chrono::Utc;
use http::StatusCode;

use crate::config::{SessionConfig, DEFAULT_FORCED_LOGOUT_PATH};
use crate::events::SessionEvent;
use crate::navigator::Navigator;
use crate::store::{TokenStorage, TokenStore};
use crate::SessionError;

/// Forces a logout when the server says the session is no longer valid.
///
/// A 401 is the one response that is authoritative about session state:
/// whatever the client believes, the server has stopped honoring the token.
/// The interceptor clears the store, emits [`SessionEvent::SessionRevoked`]
/// and navigates to the forced-logout path. Every other status passes
/// through untouched, including 403, which means "authenticated but not
/// allowed" and says nothing about the token.
///
/// ## Example
///
/// ```rust,ignore
/// let interceptor = UnauthorizedInterceptor::new(store.clone(), navigator);
///
/// let response = client.get(url).send().await?;
/// if interceptor.handle_status(response.status()) {
///     return Err(SessionError::AuthorizationDenied);
/// }
/// ```
pub struct UnauthorizedInterceptor<S: TokenStorage, N: Navigator> {
    store: TokenStore<S>,
    navigator: N,
    redirect_to: String,
}

impl<S: TokenStorage, N: Navigator> UnauthorizedInterceptor<S, N> {
    /// Creates an interceptor redirecting to the default forced-logout path.
    pub fn new(store: TokenStore<S>, navigator: N) -> Self {
        Self {
            store,
            navigator,
            redirect_to: DEFAULT_FORCED_LOGOUT_PATH.to_string(),
        }
    }

    /// Creates an interceptor redirecting to the forced-logout path from
    /// `config`.
    pub fn with_config(store: TokenStore<S>, navigator: N, config: &SessionConfig) -> Self {
        Self {
            store,
            navigator,
            redirect_to: config.forced_logout_path.clone(),
        }
    }

    /// Overrides the forced-logout redirect path.
    #[must_use]
    pub fn with_redirect(mut self, path: impl Into<String>) -> Self {
        self.redirect_to = path.into();
        self
    }

    /// Inspect a response status. Returns `true` when the session was
    /// revoked and the caller should treat the request as failed.
    pub fn handle_status(&self, status: StatusCode) -> bool {
        if status != StatusCode::UNAUTHORIZED {
            return false;
        }

        self.force_logout();
        true
    }

    /// Inspect a client error. Returns `true` when the session was revoked.
    pub fn handle_error(&self, error: &SessionError) -> bool {
        if !matches!(error, SessionError::AuthorizationDenied) {
            return false;
        }

        self.force_logout();
        true
    }

    fn force_logout(&self) {
        log::warn!(target: "vestibule_session", "msg=\"server rejected session, forcing logout\", redirect_to=\"{}\"", self.redirect_to);

        self.store.clear();
        self.store.emit(SessionEvent::SessionRevoked { at: Utc::now() });
        self.navigator.navigate(&self.redirect_to);
    }
}
