//! List Accounts Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::error::AccountResult;

/// List accounts use case
pub struct ListAccountsUseCase<R> {
    repository: Arc<R>,
}

impl<R: AccountRepository> ListAccountsUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// All accounts of the caller. Zero accounts is an empty list, not
    /// an error.
    pub async fn execute(&self, caller: UserId) -> AccountResult<Vec<Account>> {
        self.repository.list_by_owner(caller).await
    }
}
