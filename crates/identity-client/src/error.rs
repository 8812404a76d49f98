//! Provider error taxonomy.

use thiserror::Error;

/// Service code reported when an account exists but awaits confirmation.
const USER_NOT_CONFIRMED: &str = "UserNotConfirmedException";

/// Service code reported for rejected parameters, notably password-reset
/// requests against unconfirmed accounts.
const INVALID_PARAMETER: &str = "InvalidParameterException";

/// Identity-provider error type.
#[derive(Error, Debug)]
pub enum IdentityError {
    /// The account exists but has not been confirmed yet.
    #[error("account is not confirmed")]
    UserNotConfirmed,

    /// The provider rejected a request parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// No authenticated session is available.
    #[error("no active session")]
    NoSession,

    /// Any other provider-reported failure, kept with its wire code.
    #[error("{code}: {message}")]
    Service { code: String, message: String },

    /// The provider answered with something the binding could not use.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The provider binding's local token storage failed.
    #[error("token storage error: {0}")]
    Storage(String),

    /// Transport-level failure before the provider answered.
    #[error("network error: {0}")]
    Network(String),
}

impl IdentityError {
    /// Map a provider service code onto the matching variant.
    pub fn from_service_code(code: &str, message: impl Into<String>) -> Self {
        match code {
            USER_NOT_CONFIRMED => IdentityError::UserNotConfirmed,
            INVALID_PARAMETER => IdentityError::InvalidParameter(message.into()),
            _ => IdentityError::Service {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }

    /// True for the unconfirmed-account failure on sign-in.
    pub fn is_user_not_confirmed(&self) -> bool {
        matches!(self, IdentityError::UserNotConfirmed)
    }

    /// True for the rejected-parameter failure on password-reset requests.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, IdentityError::InvalidParameter(_))
    }
}

/// Result type alias using IdentityError.
pub type IdentityResult<T> = Result<T, IdentityError>;
