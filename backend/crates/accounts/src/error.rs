//! Account Error Types
//!
//! Every client-visible variant serializes to the
//! `{ "result": false, "message": ... }` body shape.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::kind::ErrorKind;
use thiserror::Error;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// Required fields absent from the request body
    #[error("Des informations obligatoires sont manquantes.")]
    MissingFields,

    /// Referenced owner does not exist
    #[error("L'utilisateur n'existe pas.")]
    OwnerNotFound,

    /// Delete request carried neither an id nor a name selector
    #[error("Des informations obligatoires sont manquantes.")]
    MissingSelector,

    /// No account matches the selector
    #[error("Compte introuvable.")]
    NotFound,

    /// Account exists but belongs to another user
    #[error("Accès non autorisé.")]
    Forbidden,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::MissingFields
            | AccountError::OwnerNotFound
            | AccountError::MissingSelector => StatusCode::BAD_REQUEST,
            AccountError::NotFound => StatusCode::NOT_FOUND,
            AccountError::Forbidden => StatusCode::FORBIDDEN,
            AccountError::Database(_) | AccountError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::MissingFields
            | AccountError::OwnerNotFound
            | AccountError::MissingSelector => ErrorKind::BadRequest,
            AccountError::NotFound => ErrorKind::NotFound,
            AccountError::Forbidden => ErrorKind::Forbidden,
            AccountError::Database(_) | AccountError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            AccountError::Forbidden => {
                tracing::warn!("Account access denied");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let message = match &self {
            // Store failure detail stays server-side.
            AccountError::Database(_) | AccountError::Internal(_) => {
                "Erreur interne du serveur.".to_string()
            }
            _ => self.to_string(),
        };

        let body = serde_json::json!({
            "result": false,
            "message": message,
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AccountError::MissingFields.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AccountError::OwnerNotFound.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AccountError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AccountError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AccountError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(AccountError::NotFound.to_string(), "Compte introuvable.");
        assert_eq!(AccountError::Forbidden.to_string(), "Accès non autorisé.");
        assert_eq!(
            AccountError::OwnerNotFound.to_string(),
            "L'utilisateur n'existe pas."
        );
    }
}
