//! Delete Account Use Case
//!
//! Deletion by id or by name. Same guard order as update: existence,
//! then ownership, then the delete itself.

use std::sync::Arc;

use kernel::id::{AccountId, UserId};

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::error::{AccountError, AccountResult};

/// Delete account input
///
/// At least one selector is required; when both are given the id wins.
/// The name selector is resolved within the caller's own accounts, so
/// it can only ever hit 404, never 403.
#[derive(Debug, Default)]
pub struct DeleteAccountInput {
    pub id: Option<i64>,
    pub name: Option<String>,
}

/// Delete account use case
pub struct DeleteAccountUseCase<R> {
    repository: Arc<R>,
}

impl<R: AccountRepository> DeleteAccountUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Execute the delete flow
    pub async fn execute(&self, caller: UserId, input: DeleteAccountInput) -> AccountResult<()> {
        let account = self.resolve(caller, input).await?;

        if !account.is_owned_by(caller) {
            return Err(AccountError::Forbidden);
        }

        self.repository.delete(account.id).await?;

        tracing::info!(
            account_id = account.id.as_i64(),
            user_id = caller.as_i64(),
            "Account deleted"
        );

        Ok(())
    }

    async fn resolve(
        &self,
        caller: UserId,
        input: DeleteAccountInput,
    ) -> AccountResult<Account> {
        if let Some(id) = input.id {
            return self
                .repository
                .find_by_id(AccountId::from_i64(id))
                .await?
                .ok_or(AccountError::NotFound);
        }
        if let Some(name) = input.name {
            return self
                .repository
                .find_by_name(caller, &name)
                .await?
                .ok_or(AccountError::NotFound);
        }
        Err(AccountError::MissingSelector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryAccountRepository;

    #[tokio::test]
    async fn test_delete_by_id() {
        let repository = Arc::new(MemoryAccountRepository::with_users(&[1]));
        let id = repository.seed_account(1, "Courant").await;

        let use_case = DeleteAccountUseCase::new(repository.clone());
        use_case
            .execute(
                UserId::from_i64(1),
                DeleteAccountInput {
                    id: Some(id.as_i64()),
                    name: None,
                },
            )
            .await
            .unwrap();

        assert!(repository.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_by_name() {
        let repository = Arc::new(MemoryAccountRepository::with_users(&[1]));
        let id = repository.seed_account(1, "Épargne").await;

        let use_case = DeleteAccountUseCase::new(repository.clone());
        use_case
            .execute(
                UserId::from_i64(1),
                DeleteAccountInput {
                    id: None,
                    name: Some("Épargne".to_string()),
                },
            )
            .await
            .unwrap();

        assert!(repository.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_without_selector() {
        let repository = Arc::new(MemoryAccountRepository::with_users(&[1]));
        let use_case = DeleteAccountUseCase::new(repository);

        let err = use_case
            .execute(UserId::from_i64(1), DeleteAccountInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AccountError::MissingSelector));
    }

    #[tokio::test]
    async fn test_delete_unknown_account_is_not_found() {
        let repository = Arc::new(MemoryAccountRepository::with_users(&[1]));
        let use_case = DeleteAccountUseCase::new(repository);

        let err = use_case
            .execute(
                UserId::from_i64(1),
                DeleteAccountInput {
                    id: Some(999),
                    name: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AccountError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_foreign_account_is_forbidden_and_kept() {
        let repository = Arc::new(MemoryAccountRepository::with_users(&[1, 2]));
        let id = repository.seed_account(1, "Courant").await;

        let use_case = DeleteAccountUseCase::new(repository.clone());
        let err = use_case
            .execute(
                UserId::from_i64(2),
                DeleteAccountInput {
                    id: Some(id.as_i64()),
                    name: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AccountError::Forbidden));

        assert!(repository.find_by_id(id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_by_name_scoped_to_caller() {
        // Another user's account with the same name is invisible here.
        let repository = Arc::new(MemoryAccountRepository::with_users(&[1, 2]));
        repository.seed_account(1, "Courant").await;

        let use_case = DeleteAccountUseCase::new(repository);
        let err = use_case
            .execute(
                UserId::from_i64(2),
                DeleteAccountInput {
                    id: None,
                    name: Some("Courant".to_string()),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AccountError::NotFound));
    }
}
