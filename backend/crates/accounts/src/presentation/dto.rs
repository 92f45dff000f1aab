//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::account::Account;

/// Serialized account, as returned by every endpoint
#[derive(Debug, Clone, Serialize)]
pub struct AccountDto {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub balance: f64,
    pub currency: String,
    pub is_active: bool,
}

impl From<Account> for AccountDto {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.as_i64(),
            user_id: account.user_id.as_i64(),
            name: account.name,
            balance: account.balance,
            currency: account.currency,
            is_active: account.is_active,
        }
    }
}

// ============================================================================
// List
// ============================================================================

/// List accounts response
#[derive(Debug, Clone, Serialize)]
pub struct ListAccountsResponse {
    pub result: bool,
    pub accounts: Vec<AccountDto>,
}

// ============================================================================
// Create
// ============================================================================

/// Create account request; absent keys become `None` and are reported
/// as missing fields
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAccountRequest {
    pub user_id: Option<i64>,
    pub name: Option<String>,
    pub balance: Option<f64>,
    pub currency: Option<String>,
    pub is_active: Option<bool>,
}

/// Create account response
#[derive(Debug, Clone, Serialize)]
pub struct CreateAccountResponse {
    pub result: bool,
    pub message: String,
    pub account: AccountDto,
}

// ============================================================================
// Update
// ============================================================================

/// Partial update request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAccountRequest {
    pub name: Option<String>,
    pub balance: Option<f64>,
    pub currency: Option<String>,
    pub is_active: Option<bool>,
}

/// Update account response
#[derive(Debug, Clone, Serialize)]
pub struct UpdateAccountResponse {
    pub result: bool,
    pub message: String,
    pub account: AccountDto,
}

// ============================================================================
// Delete
// ============================================================================

/// Delete selector, from the query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteAccountQuery {
    pub id: Option<i64>,
    pub name: Option<String>,
}

/// Delete account response
#[derive(Debug, Clone, Serialize)]
pub struct DeleteAccountResponse {
    pub result: bool,
    pub message: String,
}
