//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router, http,
    http::{Method, header},
    middleware,
};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use accounts::{PgAccountRepository, accounts_router};
use auth::{
    AuthConfig, AuthGateState, PgUserRepository, TokenService, auth_router, require_auth,
    token_router,
};
use kernel::error::app_error::AppError;

async fn unknown_route() -> AppError {
    AppError::not_found("Route non trouvée.")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,accounts=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Required configuration; absence is a startup failure, not a
    // runtime one
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");
    let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set in environment");

    let mut config = AuthConfig::new(jwt_secret)?;
    if env::var("LEGACY_TOKEN_STORE_CHECK").as_deref() == Ok("1") {
        config = config.with_legacy_store_check(true);
    }
    let config = Arc::new(config);
    let tokens = Arc::new(TokenService::new(&config));

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Account routes sit behind the auth gate
    let gate = AuthGateState {
        repo: Arc::new(PgUserRepository::new(pool.clone())),
        tokens: tokens.clone(),
        config,
    };
    let guarded_accounts = accounts_router(PgAccountRepository::new(pool.clone())).layer(
        middleware::from_fn(move |req, next| {
            let gate = gate.clone();
            async move { require_auth(gate, req, next).await }
        }),
    );

    // Build router
    let app = Router::new()
        .nest("/auth", auth_router(PgUserRepository::new(pool.clone()), tokens.clone()))
        .nest("/token", token_router(tokens))
        .nest("/accounts", guarded_accounts)
        .fallback(unknown_route)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
