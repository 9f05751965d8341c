use std::sync::Arc;

use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::claims::Role;
use super::errors::TokenError;
use crate::keystore::SigningKeyStore;

/// Builds and signs tokens against the shared key store.
///
/// Issuance is pure given the key: no side effects, no storage access. The
/// expiry is fixed at issuance time from the configured validity window.
pub struct TokenIssuer {
    store: Arc<SigningKeyStore>,
    validity: Duration,
    algorithm: Algorithm,
}

impl TokenIssuer {
    /// Default token validity window.
    pub const DEFAULT_VALIDITY_HOURS: i64 = 24;

    /// Create an issuer with the default 24 hour validity window.
    pub fn new(store: Arc<SigningKeyStore>) -> Self {
        Self::with_validity(store, Duration::hours(Self::DEFAULT_VALIDITY_HOURS))
    }

    /// Create an issuer with an explicit validity window.
    pub fn with_validity(store: Arc<SigningKeyStore>, validity: Duration) -> Self {
        Self {
            store,
            validity,
            algorithm: Algorithm::HS256,
        }
    }

    /// Sign a token for the given subject and role.
    ///
    /// # Errors
    /// * `Uninitialized` - No signing key was ever set
    /// * `Signing` - Serialization or signing failed
    pub fn issue(&self, user_id: i32, role: Role) -> Result<String, TokenError> {
        let keys = self.store.keys()?;
        let claims = Claims::new(user_id, role, Utc::now() + self.validity);

        encode(&Header::new(self.algorithm), &claims, &keys.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initialized_store() -> Arc<SigningKeyStore> {
        let store = Arc::new(SigningKeyStore::new());
        store.initialize(b"test_secret_key_at_least_32_bytes!");
        store
    }

    #[test]
    fn test_issue_produces_three_segment_token() {
        let issuer = TokenIssuer::new(initialized_store());
        let token = issuer.issue(42, Role::Admin).expect("Failed to issue");
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_issue_before_initialize_fails_without_panic() {
        let store = Arc::new(SigningKeyStore::new());
        let issuer = TokenIssuer::new(store);
        let result = issuer.issue(42, Role::Admin);
        assert_eq!(result, Err(TokenError::Uninitialized));
    }
}
