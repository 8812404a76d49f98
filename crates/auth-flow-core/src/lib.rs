//! Core state model for the authentication flow.
//!
//! This crate holds the pure pieces of the flow controller: the active mode,
//! the cached session with its derived profile, and the reducer mapping
//! (state, action) onto the next state. No I/O happens here.

mod reducer;
mod session;
mod state;

pub use reducer::{reduce, AuthAction};
pub use session::{Profile, Session, SessionClaims};
pub use state::{AuthMode, AuthState, SessionState};
