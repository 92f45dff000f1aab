//! Account Entity
//!
//! An owned financial record. `user_id` never changes after creation;
//! there is no transfer operation. The financial fields carry no
//! domain arithmetic here, they are stored and returned as given.

use kernel::id::{AccountId, UserId};

/// Account entity
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Store-assigned identifier
    pub id: AccountId,
    /// Owning user, fixed at creation
    pub user_id: UserId,
    pub name: String,
    pub balance: f64,
    /// Short currency code, e.g. "EUR"
    pub currency: String,
    pub is_active: bool,
}

impl Account {
    /// Whether the given caller owns this account
    pub fn is_owned_by(&self, caller: UserId) -> bool {
        self.user_id == caller
    }

    /// Apply a partial update, leaving unspecified fields untouched
    pub fn apply(&mut self, changes: AccountChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(balance) = changes.balance {
            self.balance = balance;
        }
        if let Some(currency) = changes.currency {
            self.currency = currency;
        }
        if let Some(is_active) = changes.is_active {
            self.is_active = is_active;
        }
    }
}

/// Data for an account row about to be inserted
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub user_id: UserId,
    pub name: String,
    pub balance: f64,
    pub currency: String,
    pub is_active: bool,
}

/// Partial update; `None` means "keep the current value"
#[derive(Debug, Clone, Default)]
pub struct AccountChanges {
    pub name: Option<String>,
    pub balance: Option<f64>,
    pub currency: Option<String>,
    pub is_active: Option<bool>,
}

impl AccountChanges {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.balance.is_none()
            && self.currency.is_none()
            && self.is_active.is_none()
    }
}
