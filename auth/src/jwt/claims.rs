use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::ParseRoleError;

/// Closed set of user roles.
///
/// Serialized as the lowercase name both in tokens and in storage, so an
/// invalid role string fails at the boundary instead of leaking downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Moderator,
    User,
}

impl Role {
    /// Role name as stored and serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Moderator => "moderator",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "moderator" => Ok(Role::Moderator),
            "user" => Ok(Role::User),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// Token payload: subject, role, and expiry.
///
/// Field names are the wire contract between issuer and verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i32,
    pub role: Role,
    pub exp: i64,
}

impl Claims {
    /// Build claims expiring at the given instant.
    pub fn new(user_id: i32, role: Role, expires_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            role,
            exp: expires_at.timestamp(),
        }
    }
}

/// Trusted (subject, role) pair.
///
/// Only produced by successful verification; constructing one anywhere else
/// bypasses the security boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i32,
    pub role: Role,
}

impl From<&Claims> for Identity {
    fn from(claims: &Claims) -> Self {
        Self {
            user_id: claims.user_id,
            role: claims.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_storage_form() {
        for role in [Role::Admin, Role::Moderator, Role::User] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result = "superuser".parse::<Role>();
        assert_eq!(result, Err(ParseRoleError("superuser".to_string())));
    }

    #[test]
    fn test_claims_expiry_is_fixed_at_construction() {
        let expires_at = Utc::now() + chrono::Duration::hours(24);
        let claims = Claims::new(42, Role::Admin, expires_at);
        assert_eq!(claims.exp, expires_at.timestamp());
        assert_eq!(claims.user_id, 42);
    }

    #[test]
    fn test_identity_carries_claims_fields() {
        let claims = Claims::new(42, Role::Admin, Utc::now());
        let identity = Identity::from(&claims);
        assert_eq!(identity.user_id, 42);
        assert_eq!(identity.role, Role::Admin);
    }
}
