use std::sync::Arc;

use jsonwebtoken::decode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::Identity;
use super::errors::TokenError;
use crate::keystore::SigningKeyStore;

/// Resolves raw tokens into trusted identities.
///
/// Verification is a pure function of (token, current key, current time):
/// structural parse, then constant-time signature check, then expiry check.
/// It never touches storage, which is what lets it sit on the request path.
pub struct TokenVerifier {
    store: Arc<SigningKeyStore>,
    validation: Validation,
}

impl TokenVerifier {
    /// Create a verifier bound to the shared key store.
    pub fn new(store: Arc<SigningKeyStore>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // An exp in the past is a hard failure, not a grace period.
        validation.leeway = 0;
        Self { store, validation }
    }

    /// Validate a token and return the identity it proves.
    ///
    /// # Errors
    /// * `Uninitialized` - No signing key was ever set
    /// * `Malformed` - Token is not structurally a signed token
    /// * `InvalidSignature` - Signature does not match the current key
    /// * `Expired` - Expiry timestamp is in the past
    pub fn verify(&self, token: &str) -> Result<Identity, TokenError> {
        let keys = self.store.keys()?;

        let data = decode::<Claims>(token, &keys.decoding, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed(e.to_string()),
            }
        })?;

        Ok(Identity::from(&data.claims))
    }
}
