//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, tokens: Arc<TokenService>) -> Router {
    auth_router_generic(Arc::new(repo), tokens)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: Arc<R>, tokens: Arc<TokenService>) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let state = AuthAppState { repo, tokens };

    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/signin", post(handlers::sign_in::<R>))
        .with_state(state)
}

/// Create the token refresh router
pub fn token_router(tokens: Arc<TokenService>) -> Router {
    Router::new()
        .route("/refresh", post(handlers::refresh_token))
        .with_state(tokens)
}
