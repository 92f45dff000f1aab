//! Application Configuration
//!
//! Configuration for the auth application layer. Built once at process
//! start and passed into the token service and routers; handlers can
//! assume the signing secret is always present because construction
//! fails without one.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Configuration loading errors (checked once at startup)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The signing secret is absent or empty
    #[error("JWT_SECRET must be set and non-empty")]
    MissingSecret,
}

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC signing secret for tokens
    pub jwt_secret: String,
    /// Token validity window (1 hour)
    pub token_ttl: Duration,
    /// Enable the store-backed expiration check as a secondary gate
    pub legacy_store_check: bool,
}

impl AuthConfig {
    /// Create a config from a signing secret
    ///
    /// Fails when the secret is empty; callers load the secret from the
    /// environment and treat this as a fatal startup error.
    pub fn new(jwt_secret: impl Into<String>) -> Result<Self, ConfigError> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.is_empty() {
            return Err(ConfigError::MissingSecret);
        }

        Ok(Self {
            jwt_secret,
            token_ttl: Duration::from_secs(3600),
            legacy_store_check: false,
        })
    }

    /// Enable the legacy store-backed expiration check
    pub fn with_legacy_store_check(mut self, enabled: bool) -> Self {
        self.legacy_store_check = enabled;
        self
    }

    /// Token TTL in whole seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("legacy_store_check", &self.legacy_store_check)
            .finish()
    }
}
