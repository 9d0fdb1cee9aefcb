use chrono::{DateTime, Utc};

/// Session lifecycle events emitted by the token store and the account
/// actions.
///
/// Events are always fired. If no listeners are subscribed on the store,
/// they are silently ignored (no-op).
#[derive(Debug, Clone)]
pub enum SessionEvent {
    // token lifecycle
    TokenStored {
        subject: Option<String>,
        expires_at: Option<DateTime<Utc>>,
        at: DateTime<Utc>,
    },
    TokenCleared {
        at: DateTime<Utc>,
    },

    // authentication
    LoginSucceeded {
        email: String,
        at: DateTime<Utc>,
    },
    LoginFailed {
        email: String,
        reason: String,
        at: DateTime<Utc>,
    },
    LoggedOut {
        at: DateTime<Utc>,
    },

    // forced logout after an unauthorized API response
    SessionRevoked {
        at: DateTime<Utc>,
    },
}

impl SessionEvent {
    /// Returns a dot-separated event name for logging/tracing.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TokenStored { .. } => "session.token.stored",
            Self::TokenCleared { .. } => "session.token.cleared",
            Self::LoginSucceeded { .. } => "session.login.succeeded",
            Self::LoginFailed { .. } => "session.login.failed",
            Self::LoggedOut { .. } => "session.logout",
            Self::SessionRevoked { .. } => "session.revoked",
        }
    }

    /// Returns the timestamp when this event occurred.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::TokenStored { at, .. }
            | Self::TokenCleared { at, .. }
            | Self::LoginSucceeded { at, .. }
            | Self::LoginFailed { at, .. }
            | Self::LoggedOut { at, .. }
            | Self::SessionRevoked { at, .. } => *at,
        }
    }
}
