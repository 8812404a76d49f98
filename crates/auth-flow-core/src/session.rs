//! Session and profile types.

use serde::{Deserialize, Serialize};

/// Token bundle proving authentication, with the decoded id-token claims.
///
/// Both tokens are opaque strings here; nothing in this workspace verifies
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Raw id token (JWT) issued by the identity provider.
    pub id_token: String,
    /// Raw access token (JWT).
    pub access_token: String,
    /// Claims decoded from the id-token payload.
    pub claims: SessionClaims,
}

impl Session {
    /// True when both token strings match `other`'s exactly.
    ///
    /// The reducer uses this to skip no-op session replacements.
    pub fn same_tokens(&self, other: &Session) -> bool {
        self.id_token == other.id_token && self.access_token == other.access_token
    }
}

/// Claims carried in the id token. Field names follow the wire claim names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    /// Marketing opt-in, stored by the provider as a string custom claim.
    #[serde(
        default,
        rename = "custom:allow_marketing",
        skip_serializing_if = "Option::is_none"
    )]
    pub allow_marketing: Option<String>,
}

/// Display projection of the session claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub allow_marketing: bool,
}

impl Profile {
    /// Build a profile from id-token claims.
    ///
    /// Missing name claims become empty strings; the marketing flag is the
    /// string claim coerced to a bool.
    pub fn from_claims(claims: &SessionClaims) -> Self {
        Self {
            email: claims.email.clone(),
            first_name: claims.given_name.clone().unwrap_or_default(),
            last_name: claims.family_name.clone().unwrap_or_default(),
            allow_marketing: claims.allow_marketing.as_deref() == Some("true"),
        }
    }
}
