use std::fmt;
use std::sync::OnceLock;

use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;

use crate::jwt::TokenError;

/// HS256 key material derived from the configured secret.
///
/// Only the issuer and verifier ever see these; the raw secret is not
/// retained after derivation.
pub(crate) struct Keys {
    pub(crate) encoding: EncodingKey,
    pub(crate) decoding: DecodingKey,
}

/// Process-wide holder of the token signing key.
///
/// Written at most once, then read on every issuance and verification.
/// The one-time write is guarded by [`OnceLock`], so concurrent callers at
/// startup race safely: exactly one initialization takes effect and every
/// reader afterwards observes the same key. Steady-state reads take no lock.
pub struct SigningKeyStore {
    keys: OnceLock<Keys>,
}

impl SigningKeyStore {
    /// Create an uninitialized store.
    pub const fn new() -> Self {
        Self {
            keys: OnceLock::new(),
        }
    }

    /// Set the signing secret. First writer wins; every later call is a
    /// silent no-op, never a re-key.
    pub fn initialize(&self, secret: &[u8]) {
        let _ = self.keys.set(Keys {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        });
    }

    /// Whether a secret has been set. Deployments should treat `false`
    /// after configuration loading as fatal.
    pub fn is_initialized(&self) -> bool {
        self.keys.get().is_some()
    }

    /// Key material, or `Uninitialized` when no secret was ever set.
    ///
    /// Absence of a key is a configuration defect, distinct from any
    /// verdict about a particular token.
    pub(crate) fn keys(&self) -> Result<&Keys, TokenError> {
        self.keys.get().ok_or(TokenError::Uninitialized)
    }
}

impl Default for SigningKeyStore {
    fn default() -> Self {
        Self::new()
    }
}

// Never expose key bytes, not even through Debug.
impl fmt::Debug for SigningKeyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKeyStore")
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
