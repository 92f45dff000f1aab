//! Auth Middleware
//!
//! Middleware for requiring a valid bearer token on protected routes.
//! Cryptographic verification is the primary gate; the store-backed
//! expiration check is an optional secondary gate kept for deployments
//! still relying on the recorded token columns.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use std::sync::Arc;

use kernel::id::UserId;
use platform::bearer::extract_bearer;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::error::AuthError;

/// Authenticated caller identity, attached as a request extension
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: UserId,
    pub username: String,
}

/// Middleware state
pub struct AuthGateState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<AuthConfig>,
}

impl<R> Clone for AuthGateState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            tokens: self.tokens.clone(),
            config: self.config.clone(),
        }
    }
}

/// Middleware that requires a cryptographically valid token
///
/// On success the caller identity is attached as an [`AuthUser`]
/// extension for downstream handlers.
pub async fn require_auth<R>(
    state: AuthGateState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Send + Sync + 'static,
{
    let Some(token) = extract_bearer(req.headers()) else {
        return Err(AuthError::MissingToken.into_response());
    };

    let claims = match state.tokens.verify(&token) {
        Ok(claims) => claims,
        Err(_) => return Err(AuthError::InvalidToken.into_response()),
    };

    if state.config.legacy_store_check {
        let expiration = match state.repo.token_expiration(&token).await {
            Ok(expiration) => expiration,
            Err(e) => return Err(e.into_response()),
        };
        match expiration {
            Some(expiration) if expiration > Utc::now() => {}
            _ => return Err(AuthError::StoredTokenExpired.into_response()),
        }
    }

    req.extensions_mut().insert(AuthUser {
        user_id: claims.user_id(),
        username: claims.username,
    });

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, header};
    use axum::routing::get;
    use axum::{Extension, Router, middleware};
    use tower::ServiceExt;

    use crate::testing::MemoryUserRepository;

    async fn whoami(Extension(user): Extension<AuthUser>) -> String {
        format!("{}:{}", user.user_id.as_i64(), user.username)
    }

    fn app(legacy_store_check: bool) -> (Router, Arc<TokenService>, Arc<MemoryUserRepository>) {
        let config = Arc::new(
            AuthConfig::new("test-secret")
                .unwrap()
                .with_legacy_store_check(legacy_store_check),
        );
        let tokens = Arc::new(TokenService::new(&config));
        let repo = Arc::new(MemoryUserRepository::new());

        let state = AuthGateState {
            repo: repo.clone(),
            tokens: tokens.clone(),
            config,
        };

        let router = Router::new().route("/whoami", get(whoami)).layer(
            middleware::from_fn(move |req, next| {
                let state = state.clone();
                async move { require_auth(state, req, next).await }
            }),
        );

        (router, tokens, repo)
    }

    fn get_with_token(token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/whoami");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        let (app, _, _) = app(false);
        let response = app.oneshot(get_with_token(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_garbage_token_is_unauthorized() {
        let (app, _, _) = app(false);
        let response = app
            .oneshot(get_with_token(Some("not-a-token")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_valid_token_attaches_identity() {
        let (app, tokens, _) = app(false);
        let issued = tokens.issue(UserId::from_i64(42), "alice").unwrap();

        let response = app
            .oneshot(get_with_token(Some(&issued.token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"42:alice");
    }

    #[tokio::test]
    async fn test_legacy_check_rejects_unrecorded_token() {
        // Cryptographically valid, but never recorded in the store.
        let (app, tokens, _) = app(true);
        let issued = tokens.issue(UserId::from_i64(42), "alice").unwrap();

        let response = app
            .oneshot(get_with_token(Some(&issued.token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_legacy_check_accepts_recorded_token() {
        use crate::application::sign_in::{SignInInput, SignInUseCase};
        use crate::application::sign_up::{SignUpInput, SignUpUseCase};

        let (app, tokens, repo) = app(true);

        SignUpUseCase::new(repo.clone(), tokens.clone())
            .execute(SignUpInput {
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();
        let output = SignInUseCase::new(repo, tokens)
            .execute(SignInInput {
                username: "alice".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();

        let response = app
            .oneshot(get_with_token(Some(&output.token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
