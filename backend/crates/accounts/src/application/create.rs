//! Create Account Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::account::{Account, NewAccount};
use crate::domain::repository::AccountRepository;
use crate::error::{AccountError, AccountResult};

/// Create account input
///
/// Fields are optional so absent body keys surface as the single
/// missing-fields error, not a deserialization failure.
#[derive(Debug, Default)]
pub struct CreateAccountInput {
    pub user_id: Option<i64>,
    pub name: Option<String>,
    pub balance: Option<f64>,
    pub currency: Option<String>,
    pub is_active: Option<bool>,
}

/// Create account use case
pub struct CreateAccountUseCase<R> {
    repository: Arc<R>,
}

impl<R: AccountRepository> CreateAccountUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Execute the create flow
    ///
    /// The owner is taken from the body and existence-checked against
    /// the user store before the insert.
    pub async fn execute(&self, input: CreateAccountInput) -> AccountResult<Account> {
        let (Some(user_id), Some(name), Some(balance), Some(currency), Some(is_active)) = (
            input.user_id,
            input.name,
            input.balance,
            input.currency,
            input.is_active,
        ) else {
            return Err(AccountError::MissingFields);
        };

        let name = name.trim().to_string();
        let currency = currency.trim().to_string();
        if name.is_empty() || currency.is_empty() {
            return Err(AccountError::MissingFields);
        }

        let user_id = UserId::from_i64(user_id);
        if !self.repository.user_exists(user_id).await? {
            return Err(AccountError::OwnerNotFound);
        }

        let account = self
            .repository
            .insert(&NewAccount {
                user_id,
                name,
                balance,
                currency,
                is_active,
            })
            .await?;

        tracing::info!(
            account_id = account.id.as_i64(),
            user_id = user_id.as_i64(),
            "Account created"
        );

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryAccountRepository;

    fn valid_input(user_id: i64) -> CreateAccountInput {
        CreateAccountInput {
            user_id: Some(user_id),
            name: Some("Courant".to_string()),
            balance: Some(100.0),
            currency: Some("EUR".to_string()),
            is_active: Some(true),
        }
    }

    #[tokio::test]
    async fn test_create_success() {
        let repository = Arc::new(MemoryAccountRepository::with_users(&[1]));
        let use_case = CreateAccountUseCase::new(repository);

        let account = use_case.execute(valid_input(1)).await.unwrap();
        assert_eq!(account.name, "Courant");
        assert_eq!(account.user_id.as_i64(), 1);
        assert!(account.id.as_i64() > 0);
    }

    #[tokio::test]
    async fn test_create_missing_fields() {
        let repository = Arc::new(MemoryAccountRepository::with_users(&[1]));
        let use_case = CreateAccountUseCase::new(repository);

        let err = use_case
            .execute(CreateAccountInput {
                balance: None,
                ..valid_input(1)
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AccountError::MissingFields));
    }

    #[tokio::test]
    async fn test_create_blank_name_is_missing() {
        let repository = Arc::new(MemoryAccountRepository::with_users(&[1]));
        let use_case = CreateAccountUseCase::new(repository);

        let err = use_case
            .execute(CreateAccountInput {
                name: Some("   ".to_string()),
                ..valid_input(1)
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AccountError::MissingFields));
    }

    #[tokio::test]
    async fn test_create_unknown_owner() {
        let repository = Arc::new(MemoryAccountRepository::with_users(&[1]));
        let use_case = CreateAccountUseCase::new(repository);

        let err = use_case.execute(valid_input(99)).await.unwrap_err();
        assert!(matches!(err, AccountError::OwnerNotFound));
    }
}
