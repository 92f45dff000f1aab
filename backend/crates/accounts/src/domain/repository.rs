//! Repository Traits
//!
//! Interface for account persistence. Lookups are exact-match; the
//! ownership decision itself lives in the use cases, not here.

use kernel::id::{AccountId, UserId};

use crate::domain::entity::account::{Account, NewAccount};
use crate::error::AccountResult;

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Insert a new account, returning the stored row
    async fn insert(&self, new_account: &NewAccount) -> AccountResult<Account>;

    /// Find account by ID
    async fn find_by_id(&self, account_id: AccountId) -> AccountResult<Option<Account>>;

    /// Find an account of the given owner by name
    async fn find_by_name(&self, owner: UserId, name: &str) -> AccountResult<Option<Account>>;

    /// All accounts of the given owner
    async fn list_by_owner(&self, owner: UserId) -> AccountResult<Vec<Account>>;

    /// Persist the full state of an existing account
    async fn update(&self, account: &Account) -> AccountResult<()>;

    /// Delete account by ID
    async fn delete(&self, account_id: AccountId) -> AccountResult<()>;

    /// Check that a user row exists
    async fn user_exists(&self, user_id: UserId) -> AccountResult<bool>;
}
