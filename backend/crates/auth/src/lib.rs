//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases, token service, configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, middleware, router
//!
//! ## Features
//! - User signup/signin with username + email + password
//! - Signed, time-limited bearer tokens (HS256, 1-hour window)
//! - Token refresh (single re-sign, same identity claims)
//! - Auth gate middleware attaching the verified identity to requests
//!
//! ## Security Model
//! - Passwords hashed with bcrypt (salted, fixed work factor)
//! - Token verification is cryptographic; an optional store-backed
//!   expiration check can be layered on top for server-side revocation
//! - The signing secret is injected via [`AuthConfig`], never global

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::{Claims, TokenError, TokenService};
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::{AuthGateState, AuthUser, require_auth};
pub use presentation::router::{auth_router, token_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
