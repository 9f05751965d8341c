use thiserror::Error;

/// Error type for token issuance and verification.
///
/// The verification variants are terminal and mutually exclusive: a token
/// fails structurally, or its signature does not match, or it is past its
/// expiry. `Uninitialized` is a configuration defect and must never be
/// conflated with a verdict about a token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("signing key not initialized")]
    Uninitialized,

    #[error("token is malformed: {0}")]
    Malformed(String),

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token is expired")]
    Expired,

    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Error for parsing a role from its storage representation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);
