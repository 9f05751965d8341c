use thiserror::Error;

/// Error type for password operations.
///
/// A wrong password is not an error: `verify` reports it as `Ok(false)`.
/// These variants cover the operations themselves going wrong.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Failed to hash password: {0}")]
    Hashing(String),

    #[error("Stored password hash is unreadable: {0}")]
    InvalidHash(String),
}
