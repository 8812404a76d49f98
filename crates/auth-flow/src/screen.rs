//! Screen selection: which externally supplied view should render.

use auth_flow_core::{AuthMode, AuthState, Profile, Session, SessionState};

/// The view the host should render for a given state.
///
/// Form variants carry the last-known email for pre-filling.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Session not checked yet; render nothing (or a splash).
    Loading,
    /// Sign-out confirmation view. Outranks an active session.
    SignOut,
    /// Authenticated subtree with the cached session and profile.
    Authenticated { session: Session, profile: Profile },
    SignUp { email: String },
    ForgotPassword { email: String },
    ResetPassword { email: String },
    ConfirmAccount { email: String },
    SignIn { email: String },
}

/// Map flow state onto the screen to render.
///
/// Priority order, first match wins: loading, sign-out, authenticated
/// subtree, the active form, sign-in as the default.
pub fn select_screen(state: &AuthState) -> Screen {
    match (&state.session, state.mode) {
        (SessionState::Unchecked, _) => Screen::Loading,
        (_, AuthMode::SignOut) => Screen::SignOut,
        (SessionState::Active(session), _) => Screen::Authenticated {
            session: session.clone(),
            profile: state
                .profile
                .clone()
                .unwrap_or_else(|| Profile::from_claims(&session.claims)),
        },
        (_, AuthMode::SignUp) => Screen::SignUp {
            email: state.email.clone(),
        },
        (_, AuthMode::ForgotPassword) => Screen::ForgotPassword {
            email: state.email.clone(),
        },
        (_, AuthMode::ResetPassword) => Screen::ResetPassword {
            email: state.email.clone(),
        },
        (_, AuthMode::ConfirmAccount) => Screen::ConfirmAccount {
            email: state.email.clone(),
        },
        (_, AuthMode::SignIn) => Screen::SignIn {
            email: state.email.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth_flow_core::SessionClaims;

    fn session() -> Session {
        Session {
            id_token: "idJwtToken".to_string(),
            access_token: "accessJwtToken".to_string(),
            claims: SessionClaims {
                email: "testEmail@gmail.com".to_string(),
                ..SessionClaims::default()
            },
        }
    }

    fn state(mode: AuthMode, session_state: SessionState) -> AuthState {
        let profile = session_state
            .session()
            .map(|s| Profile::from_claims(&s.claims));
        AuthState {
            mode,
            email: "testEmail@gmail.com".to_string(),
            session: session_state,
            profile,
        }
    }

    #[test]
    fn test_unchecked_session_renders_loading() {
        let screen = select_screen(&state(AuthMode::SignUp, SessionState::Unchecked));
        assert_eq!(screen, Screen::Loading);
    }

    #[test]
    fn test_loading_outranks_sign_out() {
        let screen = select_screen(&state(AuthMode::SignOut, SessionState::Unchecked));
        assert_eq!(screen, Screen::Loading);
    }

    #[test]
    fn test_sign_out_outranks_active_session() {
        let screen = select_screen(&state(AuthMode::SignOut, SessionState::Active(session())));
        assert_eq!(screen, Screen::SignOut);
    }

    #[test]
    fn test_active_session_renders_authenticated_subtree() {
        let screen = select_screen(&state(AuthMode::SignUp, SessionState::Active(session())));
        match screen {
            Screen::Authenticated { session, profile } => {
                assert_eq!(session.id_token, "idJwtToken");
                assert_eq!(profile.email, "testEmail@gmail.com");
            }
            other => panic!("expected authenticated subtree, got {other:?}"),
        }
    }

    #[test]
    fn test_form_modes_render_their_form() {
        for (mode, expected) in [
            (
                AuthMode::SignUp,
                Screen::SignUp {
                    email: "testEmail@gmail.com".to_string(),
                },
            ),
            (
                AuthMode::ForgotPassword,
                Screen::ForgotPassword {
                    email: "testEmail@gmail.com".to_string(),
                },
            ),
            (
                AuthMode::ResetPassword,
                Screen::ResetPassword {
                    email: "testEmail@gmail.com".to_string(),
                },
            ),
            (
                AuthMode::ConfirmAccount,
                Screen::ConfirmAccount {
                    email: "testEmail@gmail.com".to_string(),
                },
            ),
        ] {
            assert_eq!(select_screen(&state(mode, SessionState::Absent)), expected);
        }
    }

    #[test]
    fn test_default_is_sign_in_with_email() {
        let screen = select_screen(&state(AuthMode::SignIn, SessionState::Absent));
        assert_eq!(
            screen,
            Screen::SignIn {
                email: "testEmail@gmail.com".to_string(),
            }
        );
    }
}
