//! Password Hashing and Verification
//!
//! bcrypt-based password handling with:
//! - Randomized per-password salt (embedded in the digest)
//! - Fixed work factor (cost 10)
//! - Zeroization of clear-text material
//!
//! Verification mismatch is a boolean `false`, never an error; only a
//! malformed digest is an error. All functions are pure CPU work with no
//! shared mutable state, safe to call from concurrent requests.

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// bcrypt work factor (2^10 rounds)
pub const HASH_COST: u32 = 10;

/// Minimum password length accepted at signup
pub const MIN_PASSWORD_LENGTH: usize = 6;

// ============================================================================
// Error Types
// ============================================================================

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored digest cannot be parsed
    #[error("Invalid password digest format")]
    InvalidDigestFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Ensures password material is erased from memory when dropped.
/// Debug output is redacted; the type does not implement `Clone`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Wrap a raw password received from a request body
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    /// Character count (for policy checks, counts code points not bytes)
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    /// Hash the password with bcrypt at [`HASH_COST`]
    ///
    /// A fresh random salt is generated per call, so hashing the same
    /// password twice yields different digests.
    pub fn hash(&self) -> Result<PasswordDigest, PasswordHashError> {
        let digest = bcrypt::hash(self.as_str(), HASH_COST)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(PasswordDigest(digest))
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Password Digest (Safe to store)
// ============================================================================

/// One-way salted password digest, safe to persist
///
/// Stores the bcrypt digest string, which embeds the algorithm version,
/// cost and salt.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Create from a stored digest string (e.g. from the database)
    pub fn from_stored(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the digest string for storage
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Verify a password against this digest
    ///
    /// Returns `Ok(false)` on mismatch; only a digest that cannot be
    /// parsed is an error.
    pub fn verify(&self, password: &ClearTextPassword) -> Result<bool, PasswordHashError> {
        bcrypt::verify(password.as_str(), &self.0)
            .map_err(|_| PasswordHashError::InvalidDigestFormat)
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordDigest")
            .field("digest", &"[DIGEST]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
