//! Route guards.
//!
//! A guard is an async predicate the router consults before completing a
//! navigation. Guards here never mutate the session; a denial's only side
//! effects are a redirect through the [`Navigator`](crate::Navigator) and
//! a warning log line.
//!
//! # Trait
//!
//! | Item | Description |
//! |------|-------------|
//! | [`RouteGuard`] | `check()` returning a [`GuardDecision`] |
//! | [`check_all`] | sequential composition, first deny wins |
//!
//! # Guards
//!
//! | Guard | Denies when | Redirects to |
//! |-------|-------------|--------------|
//! | [`AccessGuard`] | not authenticated | `/user-account/login` |
//! | [`ProfileCompleteGuard`] | profile incomplete or unknown | `/user-profile/complete` |

mod access;
mod profile;

use async_trait::async_trait;

pub use access::AccessGuard;
pub use profile::ProfileCompleteGuard;

/// Outcome of a guard check: allow, or deny with the redirect target the
/// navigator was already sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Navigation may proceed.
    Allow,
    /// Navigation is blocked and the user was redirected.
    Deny {
        /// The path the navigator was sent to.
        redirect_to: String,
    },
}

impl GuardDecision {
    /// Returns true for [`GuardDecision::Allow`].
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Returns the redirect target of a denial, if any.
    pub fn redirect_to(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::Deny { redirect_to } => Some(redirect_to),
        }
    }
}

/// An async route predicate.
#[async_trait]
pub trait RouteGuard: Send + Sync {
    /// Evaluates the guard for the current session.
    async fn check(&self) -> GuardDecision;
}

/// Runs guards in order; the first denial short-circuits and is returned.
///
/// An empty slice allows.
pub async fn check_all(guards: &[&dyn RouteGuard]) -> GuardDecision {
    for guard in guards {
        let decision = guard.check().await;
        if !decision.is_allowed() {
            return decision;
        }
    }

    GuardDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedGuard(GuardDecision);

    #[async_trait]
    impl RouteGuard for FixedGuard {
        async fn check(&self) -> GuardDecision {
            self.0.clone()
        }
    }

    #[test]
    fn test_decision_accessors() {
        assert!(GuardDecision::Allow.is_allowed());
        assert_eq!(GuardDecision::Allow.redirect_to(), None);

        let deny = GuardDecision::Deny {
            redirect_to: "/login".to_owned(),
        };
        assert!(!deny.is_allowed());
        assert_eq!(deny.redirect_to(), Some("/login"));
    }

    #[tokio::test]
    async fn test_check_all_empty_allows() {
        assert_eq!(check_all(&[]).await, GuardDecision::Allow);
    }

    #[tokio::test]
    async fn test_check_all_first_deny_wins() {
        let allow = FixedGuard(GuardDecision::Allow);
        let deny_a = FixedGuard(GuardDecision::Deny {
            redirect_to: "/a".to_owned(),
        });
        let deny_b = FixedGuard(GuardDecision::Deny {
            redirect_to: "/b".to_owned(),
        });

        let decision = check_all(&[&allow, &deny_a, &deny_b]).await;
        assert_eq!(decision.redirect_to(), Some("/a"));
    }

    #[tokio::test]
    async fn test_check_all_all_allow() {
        let first = FixedGuard(GuardDecision::Allow);
        let second = FixedGuard(GuardDecision::Allow);

        assert!(check_all(&[&first, &second]).await.is_allowed());
    }
}
