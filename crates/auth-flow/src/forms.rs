//! Form collaborator value types.
//!
//! Each pluggable form submits one of these to its controller handler.
//! Field validation (matching password confirmations, formats) belongs to
//! the host's form components, not to the controller.

/// Sign-in form submission.
#[derive(Debug, Clone)]
pub struct SignInValues {
    pub email: String,
    pub password: String,
}

/// Sign-up form submission.
#[derive(Debug, Clone, Default)]
pub struct SignUpValues {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub allow_marketing: Option<bool>,
}

/// Forgot-password form submission.
#[derive(Debug, Clone)]
pub struct ForgotPasswordValues {
    pub email: String,
}

/// Reset-password form submission. The email is the one stored when the
/// reset was requested.
#[derive(Debug, Clone)]
pub struct ResetPasswordValues {
    pub code: String,
    pub password: String,
    pub password_confirm: String,
}

/// Confirm-account form submission. The stored email wins over the field.
#[derive(Debug, Clone)]
pub struct ConfirmAccountValues {
    pub email: String,
    pub code: String,
}
