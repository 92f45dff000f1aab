//! In-memory repository for use case and handler tests.

use std::sync::Mutex;

use kernel::id::{AccountId, UserId};

use crate::domain::entity::account::{Account, NewAccount};
use crate::domain::repository::AccountRepository;
use crate::error::AccountResult;

/// In-memory account store with a fixed set of known users.
#[derive(Default)]
pub(crate) struct MemoryAccountRepository {
    users: Vec<i64>,
    accounts: Mutex<Vec<Account>>,
    next_id: Mutex<i64>,
}

impl MemoryAccountRepository {
    pub(crate) fn with_users(users: &[i64]) -> Self {
        Self {
            users: users.to_vec(),
            ..Default::default()
        }
    }

    /// Insert an account with zero balance for tests
    pub(crate) async fn seed_account(&self, user_id: i64, name: &str) -> AccountId {
        let account = self
            .insert(&NewAccount {
                user_id: UserId::from_i64(user_id),
                name: name.to_string(),
                balance: 0.0,
                currency: "EUR".to_string(),
                is_active: true,
            })
            .await
            .unwrap();
        account.id
    }
}

impl AccountRepository for MemoryAccountRepository {
    async fn insert(&self, new_account: &NewAccount) -> AccountResult<Account> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;

        let account = Account {
            id: AccountId::from_i64(*next_id),
            user_id: new_account.user_id,
            name: new_account.name.clone(),
            balance: new_account.balance,
            currency: new_account.currency.clone(),
            is_active: new_account.is_active,
        };
        self.accounts.lock().unwrap().push(account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, account_id: AccountId) -> AccountResult<Option<Account>> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.id == account_id).cloned())
    }

    async fn find_by_name(&self, owner: UserId, name: &str) -> AccountResult<Option<Account>> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts
            .iter()
            .find(|a| a.user_id == owner && a.name == name)
            .cloned())
    }

    async fn list_by_owner(&self, owner: UserId) -> AccountResult<Vec<Account>> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts
            .iter()
            .filter(|a| a.user_id == owner)
            .cloned()
            .collect())
    }

    async fn update(&self, account: &Account) -> AccountResult<()> {
        let mut accounts = self.accounts.lock().unwrap();
        if let Some(stored) = accounts.iter_mut().find(|a| a.id == account.id) {
            *stored = account.clone();
        }
        Ok(())
    }

    async fn delete(&self, account_id: AccountId) -> AccountResult<()> {
        let mut accounts = self.accounts.lock().unwrap();
        accounts.retain(|a| a.id != account_id);
        Ok(())
    }

    async fn user_exists(&self, user_id: UserId) -> AccountResult<bool> {
        Ok(self.users.contains(&user_id.as_i64()))
    }
}
