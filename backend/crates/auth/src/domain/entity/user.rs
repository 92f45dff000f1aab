//! User Entity
//!
//! A registered identity. The password digest is carried here because the
//! signin flow verifies against it, but it must never be serialized or
//! logged; response DTOs only expose the public fields.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::PasswordDigest;

use crate::domain::value_object::{email::Email, user_name::UserName};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned identifier
    pub id: UserId,
    /// Unique login name
    pub username: UserName,
    /// Unique email address
    pub email: Email,
    /// One-way salted password digest
    pub password_hash: PasswordDigest,
    /// Latest issued token (bookkeeping for the legacy expiration check;
    /// never the primary verification path)
    pub token: Option<String>,
    /// Expiration of the latest issued token
    pub token_expiration: Option<DateTime<Utc>>,
    /// Immutable, set at insert
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Whether the bookkeeping token matches and is still within its window
    pub fn stored_token_valid(&self, token: &str, now: DateTime<Utc>) -> bool {
        match (&self.token, self.token_expiration) {
            (Some(stored), Some(expiration)) => stored == token && expiration > now,
            _ => false,
        }
    }
}

/// Data for a user row about to be inserted
///
/// The id and `created_at` are assigned by the store. Token bookkeeping
/// starts empty; the first signin fills it in.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: UserName,
    pub email: Email,
    pub password_hash: PasswordDigest,
}
