use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as _;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// One-way, salted password hashing (Argon2id).
///
/// Cost parameters are the library defaults and deliberately not
/// caller-tunable: nothing on a request path may cheapen the hash.
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// Returns a PHC string; the salt travels inside it, so no separate
    /// storage is needed.
    ///
    /// # Errors
    /// * `Hashing` - Hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        let hashed = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| PasswordError::Hashing(e.to_string()))?;

        Ok(hashed.to_string())
    }

    /// Check a plaintext password against a stored PHC hash.
    ///
    /// The plaintext is recomputed and compared; the original is never
    /// reconstructed from the hash.
    ///
    /// # Errors
    /// * `InvalidHash` - Stored hash is not a valid PHC string
    pub fn verify(&self, password: &str, stored: &str) -> Result<bool, PasswordError> {
        let parsed =
            PasswordHash::new(stored).map_err(|e| PasswordError::InvalidHash(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "s3cr3tPwd";

        let hash = hasher.hash(password).expect("Failed to hash password");
        assert_ne!(hash, password);
        assert!(hash.starts_with("$argon2"));

        assert!(hasher
            .verify(password, &hash)
            .expect("Failed to verify password"));
        assert!(!hasher
            .verify("s3cr3tPwdx", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        // Fresh salt each time.
        let hasher = PasswordHasher::new();
        let first = hasher.hash("password123").expect("Failed to hash");
        let second = hasher.hash("password123").expect("Failed to hash");
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_rejects_unreadable_hash() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("password", "not-a-phc-string");
        assert!(matches!(result, Err(PasswordError::InvalidHash(_))));
    }
}
