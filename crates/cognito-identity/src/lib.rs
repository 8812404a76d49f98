//! Cognito binding for the identity-provider capability.
//!
//! This crate provides:
//! - A thin REST client for the Cognito Identity Provider JSON API
//! - Local token persistence between calls (the binding's own storage)
//! - Unverified id-token claims decoding for profile display
//!
//! Token issuance, signature verification, and password policy all stay on
//! the provider's side of the wire.

mod claims;
mod client;
mod config;
mod store;
mod wire;

pub use client::CognitoClient;
pub use config::CognitoConfig;
pub use store::{MemoryTokenStore, StoreError, StoreResult, StoredTokens, TokenStore};
