//! In-memory repository for use case and middleware tests.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// In-memory user store enforcing the same uniqueness rules as the
/// database schema.
#[derive(Default)]
pub(crate) struct MemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: Mutex<i64>,
}

impl MemoryUserRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for MemoryUserRepository {
    async fn insert(&self, new_user: &NewUser) -> AuthResult<User> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.email.as_str() == new_user.email.as_str())
        {
            return Err(AuthError::EmailTaken);
        }
        if users
            .iter()
            .any(|u| u.username.as_str() == new_user.username.as_str())
        {
            return Err(AuthError::UsernameTaken);
        }

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;

        let user = User {
            id: UserId::from_i64(*next_id),
            username: new_user.username.clone(),
            email: new_user.email.clone(),
            password_hash: new_user.password_hash.clone(),
            token: None,
            token_expiration: None,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.username.as_str() == username.as_str())
            .cloned())
    }

    async fn email_exists(&self, email: &Email) -> AuthResult<bool> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().any(|u| u.email.as_str() == email.as_str()))
    }

    async fn record_token(
        &self,
        user_id: UserId,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == user_id) else {
            return Err(AuthError::Internal("no such user".into()));
        };
        user.token = Some(token.to_string());
        user.token_expiration = Some(expires_at);
        Ok(())
    }

    async fn token_expiration(&self, token: &str) -> AuthResult<Option<DateTime<Utc>>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.token.as_deref() == Some(token))
            .and_then(|u| u.token_expiration))
    }
}
