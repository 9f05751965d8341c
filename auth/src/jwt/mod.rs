pub mod claims;
pub mod errors;
pub mod issuer;
pub mod verifier;

pub use claims::Claims;
pub use claims::Identity;
pub use claims::Role;
pub use errors::ParseRoleError;
pub use errors::TokenError;
pub use issuer::TokenIssuer;
pub use verifier::TokenVerifier;
