//! PostgreSQL Repository Implementation

use sqlx::PgPool;

use kernel::id::{AccountId, UserId};

use crate::domain::entity::account::{Account, NewAccount};
use crate::domain::repository::AccountRepository;
use crate::error::AccountResult;

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AccountRepository for PgAccountRepository {
    async fn insert(&self, new_account: &NewAccount) -> AccountResult<Account> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO accounts (user_id, name, balance, currency, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, name, balance, currency, is_active
            "#,
        )
        .bind(new_account.user_id.as_i64())
        .bind(&new_account.name)
        .bind(new_account.balance)
        .bind(&new_account.currency)
        .bind(new_account.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_account())
    }

    async fn find_by_id(&self, account_id: AccountId) -> AccountResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, user_id, name, balance, currency, is_active
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(account_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_account()))
    }

    async fn find_by_name(&self, owner: UserId, name: &str) -> AccountResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, user_id, name, balance, currency, is_active
            FROM accounts
            WHERE user_id = $1 AND name = $2
            "#,
        )
        .bind(owner.as_i64())
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_account()))
    }

    async fn list_by_owner(&self, owner: UserId) -> AccountResult<Vec<Account>> {
        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, user_id, name, balance, currency, is_active
            FROM accounts
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_account()).collect())
    }

    async fn update(&self, account: &Account) -> AccountResult<()> {
        sqlx::query(
            r#"
            UPDATE accounts SET
                name = $2,
                balance = $3,
                currency = $4,
                is_active = $5
            WHERE id = $1
            "#,
        )
        .bind(account.id.as_i64())
        .bind(&account.name)
        .bind(account.balance)
        .bind(&account.currency)
        .bind(account.is_active)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, account_id: AccountId) -> AccountResult<()> {
        sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(account_id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn user_exists(&self, user_id: UserId) -> AccountResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(user_id.as_i64())
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: i64,
    user_id: i64,
    name: String,
    balance: f64,
    currency: String,
    is_active: bool,
}

impl AccountRow {
    fn into_account(self) -> Account {
        Account {
            id: AccountId::from_i64(self.id),
            user_id: UserId::from_i64(self.user_id),
            name: self.name,
            balance: self.balance,
            currency: self.currency,
            is_active: self.is_active,
        }
    }
}
