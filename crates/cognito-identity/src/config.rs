//! Binding configuration.

use identity_client::{IdentityError, IdentityResult};
use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable overriding the user pool region.
const ENV_REGION: &str = "AUTH_COGNITO_REGION";

/// Environment variable overriding the app client id.
const ENV_CLIENT_ID: &str = "AUTH_COGNITO_CLIENT_ID";

/// Environment variable overriding the service endpoint.
const ENV_ENDPOINT: &str = "AUTH_COGNITO_ENDPOINT";

/// Configuration for the Cognito binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CognitoConfig {
    /// AWS region hosting the user pool; used to derive the endpoint.
    pub region: String,
    /// App client id of the user pool (public client, no secret).
    pub client_id: String,
    /// Endpoint override, mainly for local stacks in tests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl CognitoConfig {
    pub fn new(region: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            client_id: client_id.into(),
            endpoint: None,
        }
    }

    /// Configuration taken from the environment.
    pub fn from_env() -> Self {
        let mut config = Self::new(
            std::env::var(ENV_REGION).unwrap_or_default(),
            std::env::var(ENV_CLIENT_ID).unwrap_or_default(),
        );
        if let Ok(endpoint) = std::env::var(ENV_ENDPOINT) {
            if !endpoint.trim().is_empty() {
                config.endpoint = Some(endpoint);
            }
        }
        config
    }

    /// The service endpoint this binding talks to.
    pub fn endpoint(&self) -> IdentityResult<Url> {
        let raw = match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://cognito-idp.{}.amazonaws.com/", self.region),
        };
        Url::parse(&raw)
            .map_err(|error| IdentityError::Protocol(format!("invalid endpoint {raw}: {error}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_derived_from_region() {
        let config = CognitoConfig::new("eu-west-1", "client-123");
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "https://cognito-idp.eu-west-1.amazonaws.com/"
        );
    }

    #[test]
    fn test_endpoint_override_wins() {
        let mut config = CognitoConfig::new("eu-west-1", "client-123");
        config.endpoint = Some("http://localhost:9229/".to_string());
        assert_eq!(config.endpoint().unwrap().as_str(), "http://localhost:9229/");
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let mut config = CognitoConfig::new("eu-west-1", "client-123");
        config.endpoint = Some("not a url".to_string());
        assert!(config.endpoint().is_err());
    }
}
