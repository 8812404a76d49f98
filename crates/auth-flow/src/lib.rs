//! Reducer-driven authentication flow controller.
//!
//! Mediates between host-supplied form views and a remote identity
//! provider: a pure reducer tracks which screen is active and caches the
//! authenticated session; the controller orchestrates provider calls, emits
//! user notifications, and keeps the cached session fresh with an optional
//! background ping.
//!
//! The host renders whatever [`AuthFlowController::screen`] returns and
//! wires each form's submit action to the matching controller handler.
//! Everything with side effects is injected: the provider
//! ([`identity_client::IdentityProvider`]), the notification sink
//! ([`Notifier`]), and the post-sign-out hook ([`ClientReload`]).

mod config;
mod controller;
mod forms;
mod notify;
mod poller;
mod screen;

pub use auth_flow_core::{
    reduce, AuthAction, AuthMode, AuthState, Profile, Session, SessionClaims, SessionState,
};
pub use config::FlowConfig;
pub use controller::{AuthFlowController, StateCallback};
pub use forms::{
    ConfirmAccountValues, ForgotPasswordValues, ResetPasswordValues, SignInValues, SignUpValues,
};
pub use notify::{ClientReload, Notifier, TracingNotifier, TracingReload};
pub use screen::{select_screen, Screen};
