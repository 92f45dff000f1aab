//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.
//!
//! IDs are store-assigned integers (`BIGSERIAL`); the wrapper exists so a
//! `UserId` can never be passed where an `AccountId` is expected.

use std::fmt;
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
/// let id = UserId::from_i64(42);
/// assert_eq!(id.as_i64(), 42);
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create from a store-assigned integer
    pub const fn from_i64(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying integer
    pub const fn as_i64(&self) -> i64 {
        self.value
    }
}

// Manual impls: derives would add `T: Trait` bounds the marker types
// do not carry.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User IDs
    pub struct User;

    /// Marker for Account IDs
    pub struct Account;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type AccountId = Id<markers::Account>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let user_id: UserId = Id::from_i64(1);
        let account_id: AccountId = Id::from_i64(1);

        // These are different types, cannot be mixed
        let _u: i64 = user_id.as_i64();
        let _a: i64 = account_id.as_i64();
    }

    #[test]
    fn test_id_roundtrip() {
        let id: UserId = 42.into();
        assert_eq!(id.as_i64(), 42);
        assert_eq!(i64::from(id), 42);
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(UserId::from_i64(7), UserId::from_i64(7));
        assert_ne!(UserId::from_i64(7), UserId::from_i64(8));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(UserId::from_i64(5).to_string(), "5");
        assert_eq!(format!("{:?}", AccountId::from_i64(5)), "Id(5)");
    }
}
