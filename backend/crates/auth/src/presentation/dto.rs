//! API DTOs (Data Transfer Objects)
//!
//! Request fields default to empty strings so missing keys surface as
//! collected validation errors instead of a deserialization failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Public view of a user, safe to serialize
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Sign up response
#[derive(Debug, Clone, Serialize)]
pub struct SignUpResponse {
    pub result: bool,
    pub message: String,
    pub user: PublicUser,
}

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Sign in response
#[derive(Debug, Clone, Serialize)]
pub struct SignInResponse {
    pub result: bool,
    pub message: String,
    pub token: String,
}

// ============================================================================
// Token Refresh
// ============================================================================

/// Token refresh response
#[derive(Debug, Clone, Serialize)]
pub struct RefreshResponse {
    pub result: bool,
    pub message: String,
    pub token: String,
}
