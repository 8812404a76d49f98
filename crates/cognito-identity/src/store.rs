//! Local token persistence owned by the provider binding.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use identity_client::IdentityError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token bundle as persisted between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTokens {
    pub id_token: String,
    pub access_token: String,
    /// Absent when the provider issued no refresh token.
    pub refresh_token: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl StoredTokens {
    /// True once the access token's lifetime has elapsed.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Token store failure.
#[derive(Error, Debug)]
#[error("token store error: {0}")]
pub struct StoreError(pub String);

impl From<StoreError> for IdentityError {
    fn from(error: StoreError) -> Self {
        IdentityError::Storage(error.to_string())
    }
}

/// Result type alias using StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

/// Where the binding keeps its tokens between calls.
///
/// The in-memory implementation is the default; hosts with their own secure
/// storage substitute one.
pub trait TokenStore: Send + Sync {
    fn set(&self, tokens: &StoredTokens) -> StoreResult<()>;
    fn get(&self) -> StoreResult<Option<StoredTokens>>;
    fn clear(&self) -> StoreResult<()>;
}

/// Process-local token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<Option<StoredTokens>>,
}

impl TokenStore for MemoryTokenStore {
    fn set(&self, tokens: &StoredTokens) -> StoreResult<()> {
        *self.tokens.lock().unwrap() = Some(tokens.clone());
        Ok(())
    }

    fn get(&self) -> StoreResult<Option<StoredTokens>> {
        Ok(self.tokens.lock().unwrap().clone())
    }

    fn clear(&self) -> StoreResult<()> {
        *self.tokens.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn tokens(expires_at: DateTime<Utc>) -> StoredTokens {
        StoredTokens {
            id_token: "idJwtToken".to_string(),
            access_token: "accessJwtToken".to_string(),
            refresh_token: Some("refreshToken".to_string()),
            expires_at,
        }
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::default();
        assert!(store.get().unwrap().is_none());

        let bundle = tokens(Utc::now() + Duration::hours(1));
        store.set(&bundle).unwrap();
        assert_eq!(store.get().unwrap(), Some(bundle));

        store.clear().unwrap();
        assert!(store.get().unwrap().is_none());
    }

    #[test]
    fn test_is_expired_boundaries() {
        let now = Utc::now();
        assert!(!tokens(now + Duration::seconds(1)).is_expired(now));
        assert!(tokens(now).is_expired(now));
        assert!(tokens(now - Duration::seconds(1)).is_expired(now));
    }
}
