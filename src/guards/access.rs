use async_trait::async_trait;

use crate::config::{SessionConfig, DEFAULT_LOGIN_PATH};
use crate::navigator::Navigator;
use crate::session::SessionState;
use crate::store::TokenStorage;

use super::{GuardDecision, RouteGuard};

/// Blocks navigation for unauthenticated sessions.
///
/// Allows when the session holds a token with a future expiry; otherwise
/// redirects to the login path and denies. An expired or malformed token
/// denies exactly like a missing one.
pub struct AccessGuard<S: TokenStorage, N: Navigator> {
    session: SessionState<S>,
    navigator: N,
    redirect_to: String,
}

impl<S: TokenStorage, N: Navigator> AccessGuard<S, N> {
    /// Creates a guard redirecting to the default login path.
    pub fn new(session: SessionState<S>, navigator: N) -> Self {
        Self {
            session,
            navigator,
            redirect_to: DEFAULT_LOGIN_PATH.to_owned(),
        }
    }

    /// Creates a guard redirecting to the login path from `config`.
    pub fn with_config(session: SessionState<S>, navigator: N, config: &SessionConfig) -> Self {
        Self::new(session, navigator).with_redirect(config.login_path.clone())
    }

    /// Overrides the redirect path.
    #[must_use]
    pub fn with_redirect(mut self, path: impl Into<String>) -> Self {
        self.redirect_to = path.into();
        self
    }
}

#[async_trait]
impl<S: TokenStorage, N: Navigator> RouteGuard for AccessGuard<S, N> {
    async fn check(&self) -> GuardDecision {
        if self.session.is_authenticated() {
            return GuardDecision::Allow;
        }

        log::warn!(
            target: "vestibule_session",
            "msg=\"access denied, redirecting to login\", redirect=\"{}\"",
            self.redirect_to
        );
        self.navigator.navigate(&self.redirect_to);

        GuardDecision::Deny {
            redirect_to: self.redirect_to.clone(),
        }
    }
}
