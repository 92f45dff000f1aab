//! User Name Value Object
//!
//! The username is the public handle used for signin and display.
//! The only hard structural rule is non-emptiness; uniqueness is the
//! store's job (unique index on `users.username`).

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 64;

/// User name value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name with validation
    ///
    /// Leading/trailing whitespace is trimmed before validation.
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into().trim().to_string();

        if name.is_empty() {
            return Err(AppError::bad_request("Le nom d'utilisateur est obligatoire."));
        }

        if name.chars().count() > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Le nom d'utilisateur ne doit pas dépasser {} caractères.",
                USER_NAME_MAX_LENGTH
            )));
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the user name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_valid() {
        assert!(UserName::new("alice").is_ok());
        assert!(UserName::new("Jean-Pierre").is_ok());
        assert_eq!(UserName::new("  bob  ").unwrap().as_str(), "bob");
    }

    #[test]
    fn test_user_name_empty() {
        let err = UserName::new("").unwrap_err();
        assert_eq!(err.message(), "Le nom d'utilisateur est obligatoire.");

        assert!(UserName::new("   ").is_err());
    }

    #[test]
    fn test_user_name_too_long() {
        let name = "a".repeat(USER_NAME_MAX_LENGTH + 1);
        assert!(UserName::new(name).is_err());
    }
}
