use async_trait::async_trait;

use crate::config::{SessionConfig, DEFAULT_LOGIN_PATH, DEFAULT_PROFILE_COMPLETION_PATH};
use crate::navigator::Navigator;
use crate::profile::ProfileClient;
use crate::session::SessionState;
use crate::store::TokenStorage;

use super::{GuardDecision, RouteGuard};

/// Blocks navigation until the user's profile is complete.
///
/// Resolves the subject email from the session, fetches the profile and
/// allows only a complete one. A missing email denies to the login path;
/// an incomplete profile, a missing profile, or a failed lookup all deny
/// to the profile completion path. Lookup errors are never surfaced to
/// the caller.
pub struct ProfileCompleteGuard<S: TokenStorage, P: ProfileClient, N: Navigator> {
    session: SessionState<S>,
    profiles: P,
    navigator: N,
    completion_path: String,
    login_path: String,
}

impl<S: TokenStorage, P: ProfileClient, N: Navigator> ProfileCompleteGuard<S, P, N> {
    /// Creates a guard with the default redirect paths.
    pub fn new(session: SessionState<S>, profiles: P, navigator: N) -> Self {
        Self {
            session,
            profiles,
            navigator,
            completion_path: DEFAULT_PROFILE_COMPLETION_PATH.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
        }
    }

    /// Creates a guard with the redirect paths from `config`.
    pub fn with_config(
        session: SessionState<S>,
        profiles: P,
        navigator: N,
        config: &SessionConfig,
    ) -> Self {
        let mut guard = Self::new(session, profiles, navigator);
        guard.completion_path = config.profile_completion_path.clone();
        guard.login_path = config.login_path.clone();
        guard
    }

    /// Overrides the profile completion redirect path.
    #[must_use]
    pub fn with_completion_redirect(mut self, path: impl Into<String>) -> Self {
        self.completion_path = path.into();
        self
    }

    fn deny(&self, redirect_to: &str) -> GuardDecision {
        self.navigator.navigate(redirect_to);
        GuardDecision::Deny {
            redirect_to: redirect_to.to_owned(),
        }
    }
}

#[async_trait]
impl<S: TokenStorage, P: ProfileClient, N: Navigator> RouteGuard
    for ProfileCompleteGuard<S, P, N>
{
    async fn check(&self) -> GuardDecision {
        let Some(email) = self.session.subject_email() else {
            log::warn!(
                target: "vestibule_session",
                "msg=\"no subject in session, redirecting to login\", redirect=\"{}\"",
                self.login_path
            );
            return self.deny(&self.login_path);
        };

        match self.profiles.get_profile_by_email(&email).await {
            Ok(profile) if profile.is_complete() => GuardDecision::Allow,
            Ok(_) => {
                log::warn!(
                    target: "vestibule_session",
                    "msg=\"profile incomplete, redirecting\", redirect=\"{}\"",
                    self.completion_path
                );
                self.deny(&self.completion_path)
            }
            Err(err) => {
                // Not found and transport failures deny the same way an
                // incomplete profile does.
                log::debug!(
                    target: "vestibule_session",
                    "msg=\"profile lookup failed, treating as incomplete\", error=\"{err}\""
                );
                self.deny(&self.completion_path)
            }
        }
    }
}
