use std::sync::Arc;
use std::time::Duration;

use auth::TokenVerifier;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_film::create_film;
use super::handlers::create_review::create_review;
use super::handlers::get_film::get_film;
use super::handlers::list_reviews::list_reviews;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::search_films::search_films;
use super::middleware::authenticate as auth_middleware;
use crate::domain::film::service::FilmService;
use crate::domain::review::service::ReviewService;
use crate::domain::user::service::AuthService;
use crate::outbound::repositories::PostgresFilmRepository;
use crate::outbound::repositories::PostgresReviewRepository;
use crate::outbound::repositories::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PostgresUserRepository>>,
    pub film_service: Arc<FilmService<PostgresFilmRepository>>,
    pub review_service: Arc<ReviewService<PostgresReviewRepository>>,
    pub token_verifier: Arc<TokenVerifier>,
}

pub fn create_router(
    auth_service: Arc<AuthService<PostgresUserRepository>>,
    film_service: Arc<FilmService<PostgresFilmRepository>>,
    review_service: Arc<ReviewService<PostgresReviewRepository>>,
    token_verifier: Arc<TokenVerifier>,
) -> Router {
    let state = AppState {
        auth_service,
        film_service,
        review_service,
        token_verifier,
    };

    let public_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/films", get(search_films))
        .route("/films/:film_id", get(get_film))
        .route("/films/:film_id/reviews", get(list_reviews));

    let protected_routes = Router::new()
        .route("/films", post(create_film))
        .route("/films/:film_id/reviews", post(create_review))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.token_verifier),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
