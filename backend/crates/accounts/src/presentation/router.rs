//! Accounts Router

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::AccountRepository;
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::handlers::{self, AccountAppState};

/// Create the Accounts router with PostgreSQL repository
///
/// The auth gate is layered on by the caller; these routes assume an
/// [`auth::AuthUser`] extension is present.
pub fn accounts_router(repo: PgAccountRepository) -> Router {
    accounts_router_generic(Arc::new(repo))
}

/// Create a generic Accounts router for any repository implementation
pub fn accounts_router_generic<R>(repo: Arc<R>) -> Router
where
    R: AccountRepository + Send + Sync + 'static,
{
    let state = AccountAppState { repo };

    Router::new()
        .route("/", get(handlers::list_accounts::<R>))
        .route("/create", post(handlers::create_account::<R>))
        .route("/update/{id}", put(handlers::update_account::<R>))
        .route("/delete", delete(handlers::delete_account::<R>))
        .with_state(state)
}
