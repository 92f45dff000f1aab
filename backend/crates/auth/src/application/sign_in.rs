//! Sign In Use Case
//!
//! Authenticates a username/password pair and issues a fresh signed
//! token. The issued token is also recorded on the user row for the
//! legacy store-backed expiration check.

use std::sync::Arc;

use platform::password::{ClearTextPassword, MIN_PASSWORD_LENGTH};

use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult, FieldViolation};

/// Sign in input
#[derive(Debug)]
pub struct SignInInput {
    pub username: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    pub token: String,
}

/// Sign in use case
pub struct SignInUseCase<R> {
    repository: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R: UserRepository> SignInUseCase<R> {
    pub fn new(repository: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repository, tokens }
    }

    /// Execute the sign in flow
    ///
    /// Lookup failure and password mismatch return distinct errors
    /// (404 vs 401), matching the public contract.
    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
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

        let Some(username) = username else {
            return Err(AuthError::Internal("validation state mismatch".into()));
        };

        let user = self
            .repository
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !user.password_hash.verify(&password)? {
            return Err(AuthError::InvalidPassword);
        }

        let issued = self
            .tokens
            .issue(user.id, user.username.as_str())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        self.repository
            .record_token(user.id, &issued.token, issued.expires_at)
            .await?;

        tracing::info!(user_id = user.id.as_i64(), "User signed in");

        Ok(SignInOutput {
            token: issued.token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::AuthConfig;
    use crate::application::sign_up::{SignUpInput, SignUpUseCase};
    use crate::testing::MemoryUserRepository;

    fn services() -> (Arc<MemoryUserRepository>, Arc<TokenService>) {
        let config = AuthConfig::new("test-secret").unwrap();
        (
            Arc::new(MemoryUserRepository::new()),
            Arc::new(TokenService::new(&config)),
        )
    }

    async fn register_alice(repository: Arc<MemoryUserRepository>) {
        let config = AuthConfig::new("test-secret").unwrap();
        SignUpUseCase::new(repository, Arc::new(TokenService::new(&config)))
            .execute(SignUpInput {
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_sign_in_success_issues_verifiable_token() {
        let (repository, tokens) = services();
        register_alice(repository.clone()).await;

        let use_case = SignInUseCase::new(repository, tokens.clone());
        let output = use_case
            .execute(SignInInput {
                username: "alice".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();

        let claims = tokens.verify(&output.token).unwrap();
        assert_eq!(claims.username, "alice");
        assert!(claims.sub > 0);
    }

    #[tokio::test]
    async fn test_sign_in_unknown_user() {
        let (repository, tokens) = services();
        let use_case = SignInUseCase::new(repository, tokens);

        let err = use_case
            .execute(SignInInput {
                username: "ghost".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UserNotFound));
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password() {
        let (repository, tokens) = services();
        register_alice(repository.clone()).await;

        let use_case = SignInUseCase::new(repository, tokens);
        let err = use_case
            .execute(SignInInput {
                username: "alice".to_string(),
                password: "wrong-password".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidPassword));
    }

    #[tokio::test]
    async fn test_sign_in_validates_input() {
        let (repository, tokens) = services();
        let use_case = SignInUseCase::new(repository, tokens);

        let err = use_case
            .execute(SignInInput {
                username: String::new(),
                password: "abc".to_string(),
            })
            .await
            .unwrap_err();

        let AuthError::Validation(violations) = err else {
            panic!("expected validation error");
        };
        assert_eq!(violations.len(), 2);
    }

    #[tokio::test]
    async fn test_sign_in_records_token_bookkeeping() {
        let (repository, tokens) = services();
        register_alice(repository.clone()).await;

        let use_case = SignInUseCase::new(repository.clone(), tokens);
        let output = use_case
            .execute(SignInInput {
                username: "alice".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();

        let expiration = repository.token_expiration(&output.token).await.unwrap();
        assert!(expiration.is_some());
    }
}
