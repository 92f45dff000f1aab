//! Domain Layer
//!
//! Contains the account entity and repository trait.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::account::{Account, AccountChanges, NewAccount};
pub use repository::AccountRepository;
