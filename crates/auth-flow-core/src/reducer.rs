//! The reducer: every state transition happens here.

use crate::session::{Profile, Session};
use crate::state::{AuthMode, AuthState, SessionState};

/// Actions accepted by [`reduce`].
#[derive(Debug, Clone)]
pub enum AuthAction {
    /// Switch the active mode, optionally carrying an email to pre-fill.
    SwitchMode {
        mode: AuthMode,
        email: Option<String>,
    },
    /// Replace the cached session; `None` means "checked, no session".
    UpdateSession(Option<Session>),
}

/// Pure transition function mapping (state, action) onto the next state.
///
/// Replacing a session with one whose token strings are identical returns
/// the input state untouched, so change listeners stay quiet.
pub fn reduce(state: AuthState, action: AuthAction) -> AuthState {
    match action {
        AuthAction::SwitchMode { mode, email } => AuthState {
            mode,
            email: email.unwrap_or(state.email),
            ..state
        },
        AuthAction::UpdateSession(None) => AuthState {
            session: SessionState::Absent,
            profile: None,
            ..state
        },
        AuthAction::UpdateSession(Some(session)) => {
            if let SessionState::Active(current) = &state.session {
                if current.same_tokens(&session) {
                    return state;
                }
            }
            let profile = Profile::from_claims(&session.claims);
            AuthState {
                session: SessionState::Active(session),
                profile: Some(profile),
                ..state
            }
        }
    }
}
