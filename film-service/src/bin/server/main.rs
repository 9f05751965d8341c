use std::sync::Arc;

use anyhow::Context;
use auth::SigningKeyStore;
use auth::TokenIssuer;
use auth::TokenVerifier;
use film_service::config::Config;
use film_service::domain::film::service::FilmService;
use film_service::domain::review::service::ReviewService;
use film_service::domain::user::service::AuthService;
use film_service::inbound::http::router::create_router;
use film_service::outbound::repositories::PostgresFilmRepository;
use film_service::outbound::repositories::PostgresReviewRepository;
use film_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "film_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "film-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    // A missing signing secret fails here, before anything is served.
    let config = Config::load().context("failed to load configuration")?;
    anyhow::ensure!(
        !config.jwt.secret.is_empty(),
        "jwt.secret must not be empty"
    );

    tracing::info!(
        database_url = %config.database.redacted_url(),
        port = config.server.port,
        jwt_expiration_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await
        .context("failed to connect to database")?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let key_store = Arc::new(SigningKeyStore::new());
    key_store.initialize(config.jwt.secret.as_bytes());

    let token_issuer = Arc::new(TokenIssuer::with_validity(
        Arc::clone(&key_store),
        chrono::Duration::hours(config.jwt.expiration_hours),
    ));
    let token_verifier = Arc::new(TokenVerifier::new(Arc::clone(&key_store)));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let film_repository = Arc::new(PostgresFilmRepository::new(pg_pool.clone()));
    let review_repository = Arc::new(PostgresReviewRepository::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(user_repository, token_issuer));
    let film_service = Arc::new(FilmService::new(film_repository));
    let review_service = Arc::new(ReviewService::new(review_repository));

    let address = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(
        address = %address,
        port = config.server.port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(auth_service, film_service, review_service, token_verifier);

    axum::serve(listener, application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutting down server");
}
