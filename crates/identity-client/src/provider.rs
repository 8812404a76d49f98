//! The provider trait and its request/outcome types.

use async_trait::async_trait;
use auth_flow_core::Session;

use crate::error::IdentityResult;

/// Well-known user attribute names.
pub mod attributes {
    pub const EMAIL: &str = "email";
    pub const GIVEN_NAME: &str = "given_name";
    pub const FAMILY_NAME: &str = "family_name";
    pub const ALLOW_MARKETING: &str = "custom:allow_marketing";
}

/// A single user attribute submitted with account creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAttribute {
    pub name: String,
    pub value: String,
}

impl UserAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Result of an account-creation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignUpOutcome {
    /// True when the provider requires a confirmation code before sign-in.
    pub confirmation_required: bool,
}

/// The identity-provider operations the flow controller orchestrates.
///
/// Implementors own token persistence: `current_session` answers from
/// whatever the binding last stored, the way a managed-auth SDK's own
/// storage would.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an account with the given attributes.
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        attributes: Vec<UserAttribute>,
    ) -> IdentityResult<SignUpOutcome>;

    /// Authenticate with email and password.
    ///
    /// Fails with [`IdentityError::UserNotConfirmed`] while the account
    /// still awaits confirmation.
    ///
    /// [`IdentityError::UserNotConfirmed`]: crate::IdentityError::UserNotConfirmed
    async fn sign_in(&self, email: &str, password: &str) -> IdentityResult<Session>;

    /// The currently authenticated session. Fails when none exists.
    async fn current_session(&self) -> IdentityResult<Session>;

    /// Start a password reset by sending a code to the account email.
    ///
    /// Fails with [`IdentityError::InvalidParameter`] for unconfirmed
    /// accounts.
    ///
    /// [`IdentityError::InvalidParameter`]: crate::IdentityError::InvalidParameter
    async fn request_password_reset(&self, email: &str) -> IdentityResult<()>;

    /// Complete a password reset with the emailed code.
    async fn submit_password_reset(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> IdentityResult<()>;

    /// Confirm a freshly created account with the emailed code.
    async fn confirm_account(&self, email: &str, code: &str) -> IdentityResult<()>;

    /// Send a fresh confirmation code.
    async fn resend_confirmation_code(&self, email: &str) -> IdentityResult<()>;

    /// End the current session.
    async fn sign_out(&self) -> IdentityResult<()>;
}
