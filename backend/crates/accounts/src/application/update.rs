//! Update Account Use Case
//!
//! Partial update behind the ownership guard. Check order is fixed:
//! existence, then ownership, then mutation. A nonexistent account is
//! 404 for every caller; a foreign account is 403 and stays untouched.

use std::sync::Arc;

use kernel::id::{AccountId, UserId};

use crate::domain::entity::account::{Account, AccountChanges};
use crate::domain::repository::AccountRepository;
use crate::error::{AccountError, AccountResult};

/// Update account input
#[derive(Debug)]
pub struct UpdateAccountInput {
    pub account_id: AccountId,
    pub changes: AccountChanges,
}

/// Update account use case
pub struct UpdateAccountUseCase<R> {
    repository: Arc<R>,
}

impl<R: AccountRepository> UpdateAccountUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Execute the update flow
    pub async fn execute(
        &self,
        caller: UserId,
        input: UpdateAccountInput,
    ) -> AccountResult<Account> {
        let mut account = self
            .repository
            .find_by_id(input.account_id)
            .await?
            .ok_or(AccountError::NotFound)?;

        if !account.is_owned_by(caller) {
            return Err(AccountError::Forbidden);
        }

        account.apply(input.changes);
        self.repository.update(&account).await?;

        tracing::info!(
            account_id = account.id.as_i64(),
            user_id = caller.as_i64(),
            "Account updated"
        );

        Ok(account)
    }
}
