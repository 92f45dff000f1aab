//! Sign Up Use Case
//!
//! Registers a new identity. Validation is collected, not fail-fast:
//! every violated field is reported in one response. The duplicate-email
//! check runs before insert for the common case, but the store's unique
//! indexes remain the authority under concurrency.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use platform::password::{ClearTextPassword, MIN_PASSWORD_LENGTH};

use crate::application::token::TokenService;
use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult, FieldViolation};

/// Sign up input
#[derive(Debug)]
pub struct SignUpInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Sign up output
///
/// Only public fields of the created user; the digest never leaves the
/// domain layer.
#[derive(Debug)]
pub struct SignUpOutput {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Sign up use case
pub struct SignUpUseCase<R> {
    repository: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R: UserRepository> SignUpUseCase<R> {
    pub fn new(repository: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repository, tokens }
    }

    /// Execute the sign up flow
    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let mut violations = Vec::new();

        let username = match UserName::new(input.username) {
            Ok(name) => Some(name),
            Err(e) => {
                violations.push(FieldViolation {
                    field: "username",
                    message: e.message().to_string(),
                });
                None
            }
        };

        let email = match Email::new(input.email) {
            Ok(email) => Some(email),
            Err(e) => {
                violations.push(FieldViolation {
                    field: "email",
                    message: e.message().to_string(),
                });
                None
            }
        };

        let password = ClearTextPassword::new(input.password);
        if password.char_count() < MIN_PASSWORD_LENGTH {
            violations.push(FieldViolation {
                field: "password",
                message: "Le mot de passe doit contenir au moins 6 caractères.".to_string(),
            });
        }

        if !violations.is_empty() {
            return Err(AuthError::Validation(violations));
        }

        // Both are Some once validation passed.
        let (Some(username), Some(email)) = (username, email) else {
            return Err(AuthError::Internal("validation state mismatch".into()));
        };

        if self.repository.email_exists(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = password.hash()?;

        let new_user = NewUser {
            username,
            email,
            password_hash,
        };

        let user = self.repository.insert(&new_user).await?;

        // Bookkeeping token; the response never carries it, the client
        // obtains a usable token through signin.
        let issued = self
            .tokens
            .issue(user.id, user.username.as_str())
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        self.repository
            .record_token(user.id, &issued.token, issued.expires_at)
            .await?;

        tracing::info!(user_id = user.id.as_i64(), "User registered");

        Ok(SignUpOutput {
            id: user.id.as_i64(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
        })
    }
}
