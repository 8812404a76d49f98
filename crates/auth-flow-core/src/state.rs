//! Flow state: the active mode plus the cached session.

use serde::{Deserialize, Serialize};

use crate::session::{Profile, Session};

/// The active screen of the auth flow. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    SignIn,
    SignUp,
    ConfirmAccount,
    ForgotPassword,
    ResetPassword,
    SignOut,
}

/// Whether the provider has been asked for a session yet, and what came back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Not asked yet; the host renders a loading placeholder.
    Unchecked,
    /// Asked; no active session exists.
    Absent,
    /// An authenticated session is cached.
    Active(Session),
}

impl SessionState {
    pub fn is_active(&self) -> bool {
        matches!(self, SessionState::Active(_))
    }

    /// The cached session, if any.
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Active(session) => Some(session),
            _ => None,
        }
    }
}

/// Single source of truth for the auth flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    pub mode: AuthMode,
    /// Last-known email, carried across mode switches to pre-fill forms.
    pub email: String,
    pub session: SessionState,
    /// Present iff `session` is [`SessionState::Active`].
    pub profile: Option<Profile>,
}

impl AuthState {
    /// Initial state: sign-in screen, session not yet checked.
    pub fn new() -> Self {
        Self {
            mode: AuthMode::SignIn,
            email: String::new(),
            session: SessionState::Unchecked,
            profile: None,
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}
