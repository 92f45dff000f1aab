//! Auth Error Types
//!
//! This module provides auth-specific error variants that serialize to the
//! exact response shapes of the public API contract. Signin lookup errors
//! use an `{ "error": ... }` body; everything else uses
//! `{ "result": false, ... }`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::kind::ErrorKind;
use serde::Serialize;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// A single violated input field, reported by collected validation
#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed input; every violated field is listed
    #[error("Validation failed ({} field(s))", .0.len())]
    Validation(Vec<FieldViolation>),

    /// Email already registered
    #[error("Un utilisateur avec cet email existe déjà.")]
    EmailTaken,

    /// Username already registered
    #[error("Un utilisateur avec ce nom existe déjà.")]
    UsernameTaken,

    /// Signin lookup found no user
    #[error("Utilisateur non trouvé.")]
    UserNotFound,

    /// Password digest mismatch
    #[error("Mot de passe incorrect.")]
    InvalidPassword,

    /// No bearer token on the request
    #[error("Pas de token reçu.")]
    MissingToken,

    /// Token failed cryptographic verification (auth gate)
    #[error("Token invalide.")]
    InvalidToken,

    /// Token failed verification on the refresh path
    #[error("Token invalide ou expiré.")]
    TokenRejected,

    /// Store-backed expiration check failed (legacy secondary gate)
    #[error("Token expiré, veuillez vous reconnecter.")]
    StoredTokenExpired,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::EmailTaken | AuthError::UsernameTaken => StatusCode::CONFLICT,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::InvalidPassword
            | AuthError::MissingToken
            | AuthError::InvalidToken
            | AuthError::TokenRejected
            | AuthError::StoredTokenExpired => StatusCode::UNAUTHORIZED,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::EmailTaken | AuthError::UsernameTaken => ErrorKind::Conflict,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::InvalidPassword
            | AuthError::MissingToken
            | AuthError::InvalidToken
            | AuthError::TokenRejected
            | AuthError::StoredTokenExpired => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    ///
    /// Store and internal failure detail stays server-side; the client
    /// only ever sees the generic message.
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidPassword => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let body = match &self {
            AuthError::Validation(violations) => serde_json::json!({
                "result": false,
                "errors": violations,
            }),
            // Signin lookup errors keep their historical body shape.
            AuthError::UserNotFound | AuthError::InvalidPassword => serde_json::json!({
                "error": self.to_string(),
            }),
            AuthError::Database(_) | AuthError::Internal(_) => serde_json::json!({
                "result": false,
                "message": "Erreur interne du serveur.",
            }),
            _ => serde_json::json!({
                "result": false,
                "message": self.to_string(),
            }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<platform::password::PasswordHashError> for AuthError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::Validation(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AuthError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(AuthError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AuthError::InvalidPassword.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::MissingToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            AuthError::InvalidPassword.to_string(),
            "Mot de passe incorrect."
        );
        assert_eq!(AuthError::MissingToken.to_string(), "Pas de token reçu.");
        assert_eq!(
            AuthError::StoredTokenExpired.to_string(),
            "Token expiré, veuillez vous reconnecter."
        );
    }

    #[test]
    fn test_internal_detail_is_not_echoed() {
        // The generic body hides the internal message.
        let err = AuthError::Internal("connection refused at 10.0.0.3".into());
        let serialized = serde_json::json!({
            "result": false,
            "message": "Erreur interne du serveur.",
        });
        // Sanity: the public message carries no detail.
        assert!(!serialized.to_string().contains("10.0.0.3"));
        assert!(err.kind().is_server_error());
    }
}
