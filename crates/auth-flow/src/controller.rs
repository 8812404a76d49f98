//! The auth flow controller.
//!
//! Owns the single state cell, orchestrates identity-provider calls, and
//! tells the host which screen to render. Every state change funnels
//! through one dispatch path, one at a time; awaited provider calls happen
//! outside the state lock.

use std::sync::{Arc, Mutex};

use auth_flow_core::{reduce, AuthAction, AuthMode, AuthState};
use identity_client::{attributes, IdentityProvider, IdentityResult, UserAttribute};
use tracing::{debug, info, warn};

use crate::config::FlowConfig;
use crate::forms::{
    ConfirmAccountValues, ForgotPasswordValues, ResetPasswordValues, SignInValues, SignUpValues,
};
use crate::notify::{ClientReload, Notifier, TracingNotifier, TracingReload};
use crate::poller::SessionPoller;
use crate::screen::{select_screen, Screen};

/// Callback invoked after every applied state change (the host's re-render
/// trigger). Equality no-ops in the reducer do not fire it.
pub type StateCallback = Box<dyn Fn(&AuthState) + Send + Sync>;

struct FlowInner {
    provider: Arc<dyn IdentityProvider>,
    notifier: Arc<dyn Notifier>,
    reload: Arc<dyn ClientReload>,
    config: Mutex<FlowConfig>,
    state: Mutex<AuthState>,
    state_callback: Mutex<Option<StateCallback>>,
}

impl FlowInner {
    /// Run `action` through the reducer and notify the callback when the
    /// state actually changed.
    fn dispatch(&self, action: AuthAction) {
        let (changed, snapshot) = {
            let mut state = self.state.lock().unwrap();
            let next = reduce(state.clone(), action);
            let changed = next != *state;
            *state = next;
            (changed, state.clone())
        };

        if changed {
            debug!(mode = ?snapshot.mode, authenticated = snapshot.session.is_active(), "Auth state changed");
            let callback = self.state_callback.lock().unwrap();
            if let Some(callback) = callback.as_ref() {
                callback(&snapshot);
            }
        }
    }

    /// Ask the provider for the current session and cache the answer.
    /// A failed lookup means "not signed in", never an error.
    async fn refresh_session(&self) {
        match self.provider.current_session().await {
            Ok(session) => self.dispatch(AuthAction::UpdateSession(Some(session))),
            Err(error) => {
                debug!(error = %error, "No current session");
                self.dispatch(AuthAction::UpdateSession(None));
            }
        }
    }

    fn stored_email(&self) -> String {
        self.state.lock().unwrap().email.clone()
    }
}

/// Reducer-driven authentication flow controller.
///
/// Cheap to clone; clones share one state cell and one poller slot.
#[derive(Clone)]
pub struct AuthFlowController {
    inner: Arc<FlowInner>,
    poller: Arc<Mutex<Option<SessionPoller>>>,
}

impl AuthFlowController {
    /// Create a controller with the default (logging) notification hooks.
    pub fn new(provider: Arc<dyn IdentityProvider>, config: FlowConfig) -> Self {
        Self::with_hooks(
            provider,
            config,
            Arc::new(TracingNotifier),
            Arc::new(TracingReload),
        )
    }

    /// Create a controller with host-supplied notification and reload hooks.
    pub fn with_hooks(
        provider: Arc<dyn IdentityProvider>,
        config: FlowConfig,
        notifier: Arc<dyn Notifier>,
        reload: Arc<dyn ClientReload>,
    ) -> Self {
        Self {
            inner: Arc::new(FlowInner {
                provider,
                notifier,
                reload,
                config: Mutex::new(config),
                state: Mutex::new(AuthState::new()),
                state_callback: Mutex::new(None),
            }),
            poller: Arc::new(Mutex::new(None)),
        }
    }

    /// Register the host's re-render trigger.
    pub fn set_state_callback(&self, callback: StateCallback) {
        *self.inner.state_callback.lock().unwrap() = Some(callback);
    }

    /// Initial session check plus poller startup. Call once on mount.
    pub async fn start(&self) {
        self.inner.refresh_session().await;
        self.restart_poller();
    }

    /// Reconfigure polling. The pending timer, if any, is cancelled before
    /// anything new is scheduled.
    pub fn set_ping_delay(&self, minutes: i64) {
        self.inner.config.lock().unwrap().session_ping_delay = minutes;
        self.restart_poller();
    }

    fn restart_poller(&self) {
        let interval = self.inner.config.lock().unwrap().ping_interval();
        let mut slot = self.poller.lock().unwrap();
        *slot = None;
        if let Some(period) = interval {
            let inner = Arc::clone(&self.inner);
            *slot = Some(SessionPoller::spawn(period, move || {
                let inner = Arc::clone(&inner);
                async move { inner.refresh_session().await }
            }));
            info!(period_secs = period.as_secs(), "Session polling enabled");
        }
    }

    /// Switch the active form, optionally carrying an email along.
    pub fn switch_mode(&self, mode: AuthMode, email: Option<String>) {
        self.inner.dispatch(AuthAction::SwitchMode { mode, email });
    }

    /// Ask the provider for the current session and cache the answer.
    ///
    /// Exposed to authenticated consumers alongside [`request_sign_out`].
    ///
    /// [`request_sign_out`]: Self::request_sign_out
    pub async fn refresh_session(&self) {
        self.inner.refresh_session().await;
    }

    /// Request the sign-out confirmation screen.
    pub fn request_sign_out(&self) {
        self.switch_mode(AuthMode::SignOut, None);
    }

    /// Read-only copy of the current state.
    pub fn snapshot(&self) -> AuthState {
        self.inner.state.lock().unwrap().clone()
    }

    /// The screen the host should render right now.
    pub fn screen(&self) -> Screen {
        select_screen(&self.snapshot())
    }

    /// Sign-in submit handler.
    pub async fn sign_in(&self, values: SignInValues) -> IdentityResult<()> {
        match self
            .inner
            .provider
            .sign_in(&values.email, &values.password)
            .await
        {
            Ok(_) => {
                self.inner.refresh_session().await;
                Ok(())
            }
            Err(error) if error.is_user_not_confirmed() => {
                info!(email = %values.email, "Sign-in attempted on unconfirmed account");
                self.inner
                    .notifier
                    .info("Account must be confirmed before signing in");
                self.switch_mode(AuthMode::ConfirmAccount, Some(values.email));
                Ok(())
            }
            Err(error) => {
                warn!(error = %error, "Sign-in failed");
                Err(error)
            }
        }
    }

    /// Sign-up submit handler.
    pub async fn sign_up(&self, values: SignUpValues) -> IdentityResult<()> {
        let mut attrs = vec![UserAttribute::new(attributes::EMAIL, &values.email)];
        if let Some(first_name) = &values.first_name {
            attrs.push(UserAttribute::new(attributes::GIVEN_NAME, first_name));
        }
        if let Some(last_name) = &values.last_name {
            attrs.push(UserAttribute::new(attributes::FAMILY_NAME, last_name));
        }
        if let Some(allow_marketing) = values.allow_marketing {
            attrs.push(UserAttribute::new(
                attributes::ALLOW_MARKETING,
                allow_marketing.to_string(),
            ));
        }

        let outcome = self
            .inner
            .provider
            .create_account(&values.email, &values.password, attrs)
            .await?;
        self.inner.notifier.success("Account created");
        if outcome.confirmation_required {
            self.switch_mode(AuthMode::ConfirmAccount, Some(values.email));
        } else {
            self.switch_mode(AuthMode::SignIn, Some(values.email));
        }
        Ok(())
    }

    /// Confirm-account submit handler; confirms against the stored email.
    pub async fn confirm_account(&self, values: ConfirmAccountValues) -> IdentityResult<()> {
        let email = self.inner.stored_email();
        self.inner
            .provider
            .confirm_account(&email, &values.code)
            .await?;
        self.inner.notifier.success("Account confirmed");
        self.switch_mode(AuthMode::SignIn, None);
        Ok(())
    }

    /// Resend the confirmation code to the stored email. Mode is unchanged.
    pub async fn resend_code(&self) -> IdentityResult<()> {
        let email = self.inner.stored_email();
        self.inner.provider.resend_confirmation_code(&email).await?;
        self.inner
            .notifier
            .success("Email with confirmation code resent");
        Ok(())
    }

    /// Forgot-password submit handler.
    ///
    /// A successful reset request always advances to the reset-password
    /// form; whether the code actually arrives is between the provider and
    /// the user's inbox.
    pub async fn forgot_password(&self, values: ForgotPasswordValues) -> IdentityResult<()> {
        match self
            .inner
            .provider
            .request_password_reset(&values.email)
            .await
        {
            Ok(()) => {
                self.switch_mode(AuthMode::ResetPassword, Some(values.email));
                Ok(())
            }
            Err(error) if error.is_invalid_parameter() => {
                info!(email = %values.email, "Password reset attempted on unconfirmed account");
                self.inner
                    .notifier
                    .info("Account must be confirmed before resetting password");
                self.switch_mode(AuthMode::ConfirmAccount, Some(values.email));
                Ok(())
            }
            Err(error) => {
                warn!(error = %error, "Password reset request failed");
                Err(error)
            }
        }
    }

    /// Reset-password submit handler; submits against the stored email.
    pub async fn reset_password(&self, values: ResetPasswordValues) -> IdentityResult<()> {
        let email = self.inner.stored_email();
        self.inner
            .provider
            .submit_password_reset(&email, &values.code, &values.password)
            .await?;
        self.inner.notifier.success("Password changed");
        self.switch_mode(AuthMode::SignIn, None);
        Ok(())
    }

    /// Sign-out confirmation handler: end the provider session, then hand
    /// control back to the host through the reload hook.
    pub async fn sign_out(&self) -> IdentityResult<()> {
        self.inner.provider.sign_out().await?;
        info!("Signed out");
        self.inner.reload.reload();
        Ok(())
    }
}
