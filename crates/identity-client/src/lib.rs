//! Identity-provider capability for the auth flow.
//!
//! The flow controller never talks to a concrete provider directly; it is
//! handed an implementation of [`IdentityProvider`]: a REST binding in
//! production, an in-memory double in tests.

mod error;
mod provider;

pub use error::{IdentityError, IdentityResult};
pub use provider::{attributes, IdentityProvider, SignUpOutcome, UserAttribute};
