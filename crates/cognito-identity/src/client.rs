//! REST client for the Cognito Identity Provider API.

use std::sync::Arc;

use async_trait::async_trait;
use auth_flow_core::Session;
use chrono::{Duration, Utc};
use identity_client::{
    IdentityError, IdentityProvider, IdentityResult, SignUpOutcome, UserAttribute,
};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::claims::decode_id_token_claims;
use crate::config::CognitoConfig;
use crate::store::{MemoryTokenStore, StoredTokens, TokenStore};
use crate::wire;

const TARGET_PREFIX: &str = "AWSCognitoIdentityProviderService";
const AMZ_JSON: &str = "application/x-amz-json-1.1";

/// Cognito Identity Provider client.
///
/// Every operation is a single POST to the service endpoint with an
/// `X-Amz-Target` action header. Tokens obtained from sign-in and refresh
/// are kept in the configured [`TokenStore`].
pub struct CognitoClient {
    http_client: reqwest::Client,
    endpoint: String,
    client_id: String,
    store: Arc<dyn TokenStore>,
}

impl CognitoClient {
    /// Create a client with a process-local in-memory token store.
    pub fn new(config: CognitoConfig) -> IdentityResult<Self> {
        Self::with_store(config, Arc::new(MemoryTokenStore::default()))
    }

    /// Create a client with a host-supplied token store.
    pub fn with_store(config: CognitoConfig, store: Arc<dyn TokenStore>) -> IdentityResult<Self> {
        let endpoint = config.endpoint()?;
        Ok(Self {
            http_client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            client_id: config.client_id,
            store,
        })
    }

    /// POST one service action and decode its JSON response.
    async fn post<Req, Resp>(&self, action: &str, request: &Req) -> IdentityResult<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let body = serde_json::to_vec(request).map_err(|error| {
            IdentityError::Protocol(format!("could not encode {action} request: {error}"))
        })?;

        debug!(action = %action, "Cognito request");

        let response = self
            .http_client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, AMZ_JSON)
            .header("X-Amz-Target", format!("{TARGET_PREFIX}.{action}"))
            .body(body)
            .send()
            .await
            .map_err(|error| IdentityError::Network(error.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| IdentityError::Network(error.to_string()))?;

        if !status.is_success() {
            return Err(service_error(status, &body));
        }

        serde_json::from_str(&body).map_err(|error| {
            IdentityError::Protocol(format!("unexpected {action} response: {error}"))
        })
    }

    /// Persist a fresh token bundle and build the session it proves.
    ///
    /// Refresh responses omit the refresh token; `fallback_refresh_token`
    /// keeps the stored one alive in that case.
    fn cache_session(
        &self,
        result: wire::AuthenticationResult,
        fallback_refresh_token: Option<String>,
    ) -> IdentityResult<Session> {
        let id_token = result.id_token.ok_or_else(|| {
            IdentityError::Protocol("authentication result is missing an id token".to_string())
        })?;
        let access_token = result.access_token.ok_or_else(|| {
            IdentityError::Protocol("authentication result is missing an access token".to_string())
        })?;

        let claims = decode_id_token_claims(&id_token)?;
        let tokens = StoredTokens {
            id_token: id_token.clone(),
            access_token: access_token.clone(),
            refresh_token: result.refresh_token.or(fallback_refresh_token),
            expires_at: Utc::now() + Duration::seconds(result.expires_in),
        };
        self.store.set(&tokens)?;

        Ok(Session {
            id_token,
            access_token,
            claims,
        })
    }
}

fn session_from_tokens(tokens: &StoredTokens) -> IdentityResult<Session> {
    let claims = decode_id_token_claims(&tokens.id_token)?;
    Ok(Session {
        id_token: tokens.id_token.clone(),
        access_token: tokens.access_token.clone(),
        claims,
    })
}

/// Map a non-2xx service response onto the error taxonomy.
fn service_error(status: StatusCode, body: &str) -> IdentityError {
    match serde_json::from_str::<wire::ErrorResponse>(body) {
        Ok(error) => {
            // Some stacks prefix the type with the service namespace.
            let code = error
                .error_type
                .rsplit('#')
                .next()
                .unwrap_or(error.error_type.as_str());
            IdentityError::from_service_code(code, error.message)
        }
        Err(_) => IdentityError::Service {
            code: format!("HTTP{}", status.as_u16()),
            message: body.chars().take(200).collect(),
        },
    }
}

#[async_trait]
impl IdentityProvider for CognitoClient {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        attributes: Vec<UserAttribute>,
    ) -> IdentityResult<SignUpOutcome> {
        let request = wire::SignUpRequest {
            client_id: self.client_id.clone(),
            username: email.to_string(),
            password: password.to_string(),
            user_attributes: attributes
                .into_iter()
                .map(|attribute| wire::AttributeType {
                    name: attribute.name,
                    value: attribute.value,
                })
                .collect(),
        };

        let response: wire::SignUpResponse = self.post("SignUp", &request).await?;
        info!(email = %email, confirmed = response.user_confirmed, "Account created");
        Ok(SignUpOutcome {
            confirmation_required: !response.user_confirmed,
        })
    }

    async fn sign_in(&self, email: &str, password: &str) -> IdentityResult<Session> {
        let request = wire::InitiateAuthRequest::password(self.client_id.clone(), email, password);
        let response: wire::InitiateAuthResponse = self.post("InitiateAuth", &request).await?;
        let result = response.authentication_result.ok_or_else(|| {
            IdentityError::Protocol("sign-in response carries no authentication result".to_string())
        })?;

        let session = self.cache_session(result, None)?;
        info!(email = %email, "Signed in");
        Ok(session)
    }

    async fn current_session(&self) -> IdentityResult<Session> {
        let tokens = self.store.get()?.ok_or(IdentityError::NoSession)?;
        if !tokens.is_expired(Utc::now()) {
            return session_from_tokens(&tokens);
        }

        let refresh_token = tokens.refresh_token.clone().ok_or(IdentityError::NoSession)?;
        debug!("Stored tokens expired, refreshing");

        let request = wire::InitiateAuthRequest::refresh(self.client_id.clone(), &refresh_token);
        let response: wire::InitiateAuthResponse =
            match self.post("InitiateAuth", &request).await {
                Ok(response) => response,
                Err(error) => {
                    warn!(error = %error, "Token refresh failed");
                    // A rejected refresh token is dead; a network blip is not.
                    if !matches!(error, IdentityError::Network(_)) {
                        self.store.clear()?;
                    }
                    return Err(error);
                }
            };
        let result = response.authentication_result.ok_or_else(|| {
            IdentityError::Protocol("refresh response carries no authentication result".to_string())
        })?;

        self.cache_session(result, Some(refresh_token))
    }

    async fn request_password_reset(&self, email: &str) -> IdentityResult<()> {
        let request = wire::ForgotPasswordRequest {
            client_id: self.client_id.clone(),
            username: email.to_string(),
        };
        let _: wire::Empty = self.post("ForgotPassword", &request).await?;
        info!(email = %email, "Password reset code requested");
        Ok(())
    }

    async fn submit_password_reset(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> IdentityResult<()> {
        let request = wire::ConfirmForgotPasswordRequest {
            client_id: self.client_id.clone(),
            username: email.to_string(),
            confirmation_code: code.to_string(),
            password: new_password.to_string(),
        };
        let _: wire::Empty = self.post("ConfirmForgotPassword", &request).await?;
        info!(email = %email, "Password reset completed");
        Ok(())
    }

    async fn confirm_account(&self, email: &str, code: &str) -> IdentityResult<()> {
        let request = wire::ConfirmSignUpRequest {
            client_id: self.client_id.clone(),
            username: email.to_string(),
            confirmation_code: code.to_string(),
        };
        let _: wire::Empty = self.post("ConfirmSignUp", &request).await?;
        info!(email = %email, "Account confirmed");
        Ok(())
    }

    async fn resend_confirmation_code(&self, email: &str) -> IdentityResult<()> {
        let request = wire::ResendConfirmationCodeRequest {
            client_id: self.client_id.clone(),
            username: email.to_string(),
        };
        let _: wire::Empty = self.post("ResendConfirmationCode", &request).await?;
        info!(email = %email, "Confirmation code resent");
        Ok(())
    }

    async fn sign_out(&self) -> IdentityResult<()> {
        if let Some(tokens) = self.store.get()? {
            let request = wire::GlobalSignOutRequest {
                access_token: tokens.access_token,
            };
            if let Err(error) = self.post::<_, wire::Empty>("GlobalSignOut", &request).await {
                warn!(error = %error, "Remote sign-out failed, clearing local tokens anyway");
            }
        }

        self.store.clear()?;
        info!("Signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_maps_known_codes() {
        let error = service_error(
            StatusCode::BAD_REQUEST,
            r#"{"__type":"UserNotConfirmedException","message":"User is not confirmed."}"#,
        );
        assert!(error.is_user_not_confirmed());
    }

    #[test]
    fn test_service_error_strips_namespace_prefix() {
        let error = service_error(
            StatusCode::BAD_REQUEST,
            r#"{"__type":"com.amazonaws.cognito#InvalidParameterException","message":"no verified email"}"#,
        );
        assert!(error.is_invalid_parameter());
    }

    #[test]
    fn test_service_error_keeps_unknown_codes() {
        let error = service_error(
            StatusCode::BAD_REQUEST,
            r#"{"__type":"NotAuthorizedException","message":"Incorrect username or password."}"#,
        );
        match error {
            IdentityError::Service { code, .. } => assert_eq!(code, "NotAuthorizedException"),
            other => panic!("expected Service variant, got {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_error_body_falls_back_to_status() {
        let error = service_error(StatusCode::BAD_GATEWAY, "<html>upstream error</html>");
        match error {
            IdentityError::Service { code, .. } => assert_eq!(code, "HTTP502"),
            other => panic!("expected Service variant, got {other:?}"),
        }
    }

    #[test]
    fn test_session_from_tokens_decodes_claims() {
        use base64::engine::general_purpose::URL_SAFE_NO_PAD;
        use base64::Engine;

        let payload =
            URL_SAFE_NO_PAD.encode(r#"{"email":"testEmail@gmail.com","given_name":"Joe"}"#);
        let tokens = StoredTokens {
            id_token: format!("header.{payload}.sig"),
            access_token: "accessJwtToken".to_string(),
            refresh_token: None,
            expires_at: Utc::now(),
        };

        let session = session_from_tokens(&tokens).unwrap();
        assert_eq!(session.claims.email, "testEmail@gmail.com");
        assert_eq!(session.access_token, "accessJwtToken");
    }
}
