//! Wire types for the Cognito Identity Provider JSON API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct AttributeType {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct SignUpRequest {
    pub client_id: String,
    pub username: String,
    pub password: String,
    pub user_attributes: Vec<AttributeType>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct SignUpResponse {
    pub user_confirmed: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct InitiateAuthRequest {
    pub client_id: String,
    pub auth_flow: String,
    pub auth_parameters: BTreeMap<String, String>,
}

impl InitiateAuthRequest {
    pub fn password(client_id: String, email: &str, password: &str) -> Self {
        let mut auth_parameters = BTreeMap::new();
        auth_parameters.insert("USERNAME".to_string(), email.to_string());
        auth_parameters.insert("PASSWORD".to_string(), password.to_string());
        Self {
            client_id,
            auth_flow: "USER_PASSWORD_AUTH".to_string(),
            auth_parameters,
        }
    }

    pub fn refresh(client_id: String, refresh_token: &str) -> Self {
        let mut auth_parameters = BTreeMap::new();
        auth_parameters.insert("REFRESH_TOKEN".to_string(), refresh_token.to_string());
        Self {
            client_id,
            auth_flow: "REFRESH_TOKEN_AUTH".to_string(),
            auth_parameters,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct InitiateAuthResponse {
    pub authentication_result: Option<AuthenticationResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct AuthenticationResult {
    pub id_token: Option<String>,
    pub access_token: Option<String>,
    /// Omitted on refresh-token responses; the stored one stays valid.
    pub refresh_token: Option<String>,
    pub expires_in: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ForgotPasswordRequest {
    pub client_id: String,
    pub username: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ConfirmForgotPasswordRequest {
    pub client_id: String,
    pub username: String,
    pub confirmation_code: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ConfirmSignUpRequest {
    pub client_id: String,
    pub username: String,
    pub confirmation_code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ResendConfirmationCodeRequest {
    pub client_id: String,
    pub username: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct GlobalSignOutRequest {
    pub access_token: String,
}

/// Service error body: `{"__type": "...", "message": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(rename = "__type")]
    pub error_type: String,
    #[serde(default, alias = "Message")]
    pub message: String,
}

/// Responses whose fields the binding does not consume.
#[derive(Debug, Deserialize)]
pub(crate) struct Empty {}
