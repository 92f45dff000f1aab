//! Repository Traits
//!
//! Interface for user persistence. Implementation is in the
//! infrastructure layer; tests use an in-memory implementation.
//!
//! All lookups are exact-match. Uniqueness of username/email is enforced
//! by the store's unique indexes, not by check-then-insert logic.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user, returning the stored row (id and created_at
    /// assigned by the store). A duplicate email/username must surface as
    /// `AuthError::EmailTaken` / `AuthError::UsernameTaken`.
    async fn insert(&self, new_user: &NewUser) -> AuthResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>>;

    /// Find user by user name
    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>>;

    /// Check if an email is already registered
    async fn email_exists(&self, email: &Email) -> AuthResult<bool>;

    /// Record the latest issued token on the user row (bookkeeping for
    /// the legacy expiration check)
    async fn record_token(
        &self,
        user_id: UserId,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> AuthResult<()>;

    /// Look up the stored expiration of the row whose `token` column
    /// equals the given token string
    async fn token_expiration(&self, token: &str) -> AuthResult<Option<DateTime<Utc>>>;
}
