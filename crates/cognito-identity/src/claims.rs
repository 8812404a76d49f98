//! Unverified id-token claims decoding.

use auth_flow_core::SessionClaims;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use identity_client::{IdentityError, IdentityResult};

/// Decode the claims from a JWT id token without verifying the signature.
///
/// Verification is the provider's concern; this binding only needs the
/// profile claims embedded in the payload.
pub(crate) fn decode_id_token_claims(id_token: &str) -> IdentityResult<SessionClaims> {
    let mut segments = id_token.split('.');
    let payload = match (segments.next(), segments.next()) {
        (Some(_), Some(payload)) if !payload.is_empty() => payload,
        _ => {
            return Err(IdentityError::Protocol(
                "id token is not a JWT".to_string(),
            ))
        }
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload).map_err(|error| {
        IdentityError::Protocol(format!("id token payload is not base64url: {error}"))
    })?;
    serde_json::from_slice(&bytes).map_err(|error| {
        IdentityError::Protocol(format!("id token claims are not valid JSON: {error}"))
    })
}
