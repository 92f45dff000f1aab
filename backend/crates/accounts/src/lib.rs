//! Accounts Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Account entity, repository trait
//! - `application/` - CRUD use cases enforcing the ownership guard
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Access Model
//! Every route sits behind the auth gate; handlers receive the verified
//! caller as an [`auth::AuthUser`] extension. Mutations check existence
//! before ownership before touching the row, so a missing account is
//! reported as 404 regardless of who asks, and a foreign account as 403.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenience
pub use error::{AccountError, AccountResult};
pub use infra::postgres::PgAccountRepository;
pub use presentation::router::{accounts_router, accounts_router_generic};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
