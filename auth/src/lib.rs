//! Authentication utilities library
//!
//! Provides the security core shared by filmhub services:
//! - Password hashing (Argon2id)
//! - Signing key lifecycle (initialize once, read from any thread)
//! - JWT token issuance and verification
//!
//! The signing key store is an explicit value rather than process-global
//! state: construct one at startup, initialize it with the configured
//! secret, and hand it (behind an `Arc`) to the issuer and verifier.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use auth::{Role, SigningKeyStore, TokenIssuer, TokenVerifier};
//!
//! let store = Arc::new(SigningKeyStore::new());
//! store.initialize(b"secret_key_at_least_32_bytes_long!");
//!
//! let issuer = TokenIssuer::new(Arc::clone(&store));
//! let verifier = TokenVerifier::new(Arc::clone(&store));
//!
//! let token = issuer.issue(42, Role::Admin).unwrap();
//! let identity = verifier.verify(&token).unwrap();
//! assert_eq!(identity.user_id, 42);
//! assert_eq!(identity.role, Role::Admin);
//! ```

pub mod jwt;
pub mod keystore;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::Identity;
pub use jwt::Role;
pub use jwt::TokenError;
pub use jwt::TokenIssuer;
pub use jwt::TokenVerifier;
pub use keystore::SigningKeyStore;
pub use password::PasswordError;
pub use password::PasswordHasher;
