//! Token Service
//!
//! Issues and verifies signed, time-limited identity tokens (HS256).
//! This is the only component that touches the signing secret;
//! verification is pure computation with no I/O.

use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::config::AuthConfig;
use kernel::id::UserId;

/// Decoded token payload
///
/// `sub` carries the user id; every issued token embeds it so identity
/// can always be re-derived without a store lookup. Username-only legacy
/// tokens fail verification as malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier
    pub sub: i64,
    /// Login name (display only, never used for authorization)
    pub username: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    /// Typed user id
    pub fn user_id(&self) -> UserId {
        UserId::from_i64(self.sub)
    }
}

/// Token verification/issuance errors
///
/// The variants are distinguished because the auth gate maps them to
/// different HTTP-level outcomes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Current time exceeds the embedded expiry
    #[error("token expired")]
    Expired,

    /// Signature does not match the server secret
    #[error("invalid token signature")]
    InvalidSignature,

    /// Token cannot be parsed or is missing required claims
    #[error("malformed token")]
    Malformed,

    /// Signing failure (infrastructure, not a client error)
    #[error("token signing failed: {0}")]
    Signing(String),
}

/// A freshly signed token together with its expiry
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Token service
///
/// Cheap to clone; the keys are derived once from the configured secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl TokenService {
    /// Build the service from startup configuration
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_secs: config.token_ttl_secs(),
        }
    }

    /// Issue a signed token for a user, expiring one TTL from now
    pub fn issue(&self, user_id: UserId, username: &str) -> Result<IssuedToken, TokenError> {
        let now = Utc::now().timestamp();
        self.issue_at(user_id, username, now)
    }

    fn issue_at(
        &self,
        user_id: UserId,
        username: &str,
        iat: i64,
    ) -> Result<IssuedToken, TokenError> {
        let exp = iat + self.ttl_secs;
        let claims = Claims {
            sub: user_id.as_i64(),
            username: username.to_string(),
            iat,
            exp,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))?;

        let expires_at = Utc
            .timestamp_opt(exp, 0)
            .single()
            .ok_or_else(|| TokenError::Signing("expiry out of range".to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Cryptographically validate signature and expiry, returning the claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // No leeway: a token one second past its expiry is expired.
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            }
        })?;

        Ok(data.claims)
    }

    /// Verify `old_token` and, if valid, re-sign the same identity claims
    /// with a renewed TTL
    pub fn refresh(&self, old_token: &str) -> Result<IssuedToken, TokenError> {
        let claims = self.verify(old_token)?;
        self.issue(claims.user_id(), &claims.username)
    }

    /// Issue a token that is already expired (test hook)
    #[cfg(test)]
    pub(crate) fn issue_expired(
        &self,
        user_id: UserId,
        username: &str,
    ) -> Result<IssuedToken, TokenError> {
        let iat = Utc::now().timestamp() - 2 * self.ttl_secs;
        self.issue_at(user_id, username, iat)
    }
}
