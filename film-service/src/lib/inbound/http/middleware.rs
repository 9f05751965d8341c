use std::sync::Arc;

use auth::Role;
use auth::TokenError;
use auth::TokenVerifier;
use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::domain::user::models::UserId;

/// Verified caller, stored in request extensions by the auth middleware.
///
/// Handlers behind the middleware can rely on its presence: no request
/// reaches them without a freshly verified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: Role,
}

/// Rejection produced by the auth middleware.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthGateError {
    #[error("Missing or malformed Authorization header, expected: Bearer <token>")]
    MissingCredential,

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl IntoResponse for AuthGateError {
    fn into_response(self) -> Response {
        // An uninitialized key store is a deployment fault, not a caller
        // fault; everything else is a plain rejection of the request.
        let status = match &self {
            AuthGateError::Token(TokenError::Uninitialized) => {
                tracing::error!("Signing key store is not initialized");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            other => {
                tracing::warn!("Request rejected: {}", other);
                StatusCode::UNAUTHORIZED
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Middleware guarding protected routes.
///
/// Extracts the bearer token, verifies it, and attaches the resulting
/// identity to the request. Any failure short-circuits before the wrapped
/// handler runs.
pub async fn authenticate(
    State(verifier): State<Arc<TokenVerifier>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req).map_err(IntoResponse::into_response)?;

    let identity = verifier
        .verify(token)
        .map_err(|e| AuthGateError::from(e).into_response())?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: UserId(identity.user_id),
        role: identity.role,
    });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, AuthGateError> {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or(AuthGateError::MissingCredential)?;

    let header = header.to_str().map_err(|_| AuthGateError::MissingCredential)?;

    header
        .strip_prefix("Bearer ")
        .ok_or(AuthGateError::MissingCredential)
}

#[cfg(test)]
mod tests {
    use auth::SigningKeyStore;
    use auth::TokenIssuer;
    use axum::body::Body;
    use axum::extract::Extension;
    use axum::middleware;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    use super::*;

    async fn whoami(Extension(user): Extension<AuthenticatedUser>) -> String {
        format!("{}:{}", user.user_id, user.role)
    }

    fn protected_app(verifier: Arc<TokenVerifier>) -> Router {
        Router::new()
            .route("/protected", get(whoami))
            .route_layer(middleware::from_fn_with_state(verifier, authenticate))
    }

    fn issuer_and_verifier() -> (TokenIssuer, Arc<TokenVerifier>) {
        let store = Arc::new(SigningKeyStore::new());
        store.initialize(b"test_secret_key_at_least_32_bytes!");
        (
            TokenIssuer::new(Arc::clone(&store)),
            Arc::new(TokenVerifier::new(store)),
        )
    }

    fn request(authorization: Option<&str>) -> axum::http::Request<Body> {
        let mut builder = axum::http::Request::builder().uri("/protected");
        if let Some(value) = authorization {
            builder = builder.header(http::header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_header_is_rejected() {
        let (_, verifier) = issuer_and_verifier();
        let app = protected_app(verifier);

        let response = app.oneshot(request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_wrong_scheme_is_rejected() {
        let (_, verifier) = issuer_and_verifier();
        let app = protected_app(verifier);

        let response = app
            .oneshot(request(Some("Basic am9objpzM2NyM3Q=")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_tampered_token_is_rejected() {
        let (issuer, verifier) = issuer_and_verifier();
        let app = protected_app(verifier);

        let token = issuer.issue(42, Role::Admin).unwrap();
        let tampered = format!("{}x", token);

        let response = app
            .oneshot(request(Some(&format!("Bearer {}", tampered))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler_with_identity() {
        let (issuer, verifier) = issuer_and_verifier();
        let app = protected_app(verifier);

        let token = issuer.issue(42, Role::Admin).unwrap();

        let response = app
            .oneshot(request(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"42:admin");
    }

    #[tokio::test]
    async fn test_expired_token_is_rejected() {
        let store = Arc::new(SigningKeyStore::new());
        store.initialize(b"test_secret_key_at_least_32_bytes!");
        let issuer = TokenIssuer::with_validity(Arc::clone(&store), chrono::Duration::hours(-1));
        let app = protected_app(Arc::new(TokenVerifier::new(store)));

        let token = issuer.issue(42, Role::Admin).unwrap();

        let response = app
            .oneshot(request(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_uninitialized_store_is_a_server_fault() {
        let verifier = Arc::new(TokenVerifier::new(Arc::new(SigningKeyStore::new())));
        let app = protected_app(verifier);

        let response = app
            .oneshot(request(Some("Bearer some.token.here")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_extract_bearer_token() {
        let req = request(Some("Bearer abc.def.ghi"));
        assert_eq!(extract_bearer_token(&req), Ok("abc.def.ghi"));

        let req = request(Some("bearer abc.def.ghi"));
        assert_eq!(
            extract_bearer_token(&req),
            Err(AuthGateError::MissingCredential)
        );
    }
}
