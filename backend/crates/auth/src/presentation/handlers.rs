//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use std::sync::Arc;

use platform::bearer::extract_bearer;

use crate::application::sign_in::{SignInInput, SignInUseCase};
use crate::application::sign_up::{SignUpInput, SignUpUseCase};
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    PublicUser, RefreshResponse, SignInRequest, SignInResponse, SignUpRequest, SignUpResponse,
};

/// Shared state for auth handlers
pub struct AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
}

// Not derived; the repository is behind an Arc and need not be Clone
// itself.
impl<R> Clone for AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            tokens: self.tokens.clone(),
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /auth/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<(StatusCode, Json<SignUpResponse>)>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.tokens.clone());

    let input = SignUpInput {
        username: req.username,
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            result: true,
            message: "Utilisateur créé avec succès.".to_string(),
            user: PublicUser {
                id: output.id,
                username: output.username,
                email: output.email,
                created_at: output.created_at,
            },
        }),
    ))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /auth/signin
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignInRequest>,
) -> AuthResult<Json<SignInResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.tokens.clone());

    let input = SignInInput {
        username: req.username,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(SignInResponse {
        result: true,
        message: "Utilisateur connecté.".to_string(),
        token: output.token,
    }))
}

// ============================================================================
// Token Refresh
// ============================================================================

/// POST /token/refresh
///
/// Verifies the presented token end to end; a token that fails for any
/// reason is reported with a single rejection message.
pub async fn refresh_token(
    State(tokens): State<Arc<TokenService>>,
    headers: HeaderMap,
) -> AuthResult<Json<RefreshResponse>> {
    let token = extract_bearer(&headers).ok_or(AuthError::MissingToken)?;

    let issued = tokens
        .refresh(&token)
        .map_err(|_| AuthError::TokenRejected)?;

    Ok(Json(RefreshResponse {
        result: true,
        message: "Token rafraîchi avec succès.".to_string(),
        token: issued.token,
    }))
}
