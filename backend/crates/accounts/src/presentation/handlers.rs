//! HTTP Handlers
//!
//! All handlers read the verified caller from the [`AuthUser`] request
//! extension attached by the auth gate.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

use auth::AuthUser;
use kernel::id::AccountId;

use crate::application::create::{CreateAccountInput, CreateAccountUseCase};
use crate::application::delete::{DeleteAccountInput, DeleteAccountUseCase};
use crate::application::list::ListAccountsUseCase;
use crate::application::update::{UpdateAccountInput, UpdateAccountUseCase};
use crate::domain::entity::account::AccountChanges;
use crate::domain::repository::AccountRepository;
use crate::error::AccountResult;
use crate::presentation::dto::{
    CreateAccountRequest, CreateAccountResponse, DeleteAccountQuery, DeleteAccountResponse,
    ListAccountsResponse, UpdateAccountRequest, UpdateAccountResponse,
};

/// Shared state for account handlers
pub struct AccountAppState<R>
where
    R: AccountRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> Clone for AccountAppState<R>
where
    R: AccountRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

// ============================================================================
// List
// ============================================================================

/// GET /accounts
pub async fn list_accounts<R>(
    State(state): State<AccountAppState<R>>,
    Extension(caller): Extension<AuthUser>,
) -> AccountResult<Json<ListAccountsResponse>>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let use_case = ListAccountsUseCase::new(state.repo.clone());
    let accounts = use_case.execute(caller.user_id).await?;

    Ok(Json(ListAccountsResponse {
        result: true,
        accounts: accounts.into_iter().map(Into::into).collect(),
    }))
}

// ============================================================================
// Create
// ============================================================================

/// POST /accounts/create
pub async fn create_account<R>(
    State(state): State<AccountAppState<R>>,
    Extension(_caller): Extension<AuthUser>,
    Json(req): Json<CreateAccountRequest>,
) -> AccountResult<(StatusCode, Json<CreateAccountResponse>)>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let use_case = CreateAccountUseCase::new(state.repo.clone());

    let account = use_case
        .execute(CreateAccountInput {
            user_id: req.user_id,
            name: req.name,
            balance: req.balance,
            currency: req.currency,
            is_active: req.is_active,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateAccountResponse {
            result: true,
            message: "Compte créé avec succès.".to_string(),
            account: account.into(),
        }),
    ))
}

// ============================================================================
// Update
// ============================================================================

/// PUT /accounts/update/{id}
pub async fn update_account<R>(
    State(state): State<AccountAppState<R>>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateAccountRequest>,
) -> AccountResult<Json<UpdateAccountResponse>>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let use_case = UpdateAccountUseCase::new(state.repo.clone());

    let account = use_case
        .execute(
            caller.user_id,
            UpdateAccountInput {
                account_id: AccountId::from_i64(id),
                changes: AccountChanges {
                    name: req.name,
                    balance: req.balance,
                    currency: req.currency,
                    is_active: req.is_active,
                },
            },
        )
        .await?;

    Ok(Json(UpdateAccountResponse {
        result: true,
        message: "Compte mis à jour avec succès.".to_string(),
        account: account.into(),
    }))
}

// ============================================================================
// Delete
// ============================================================================

/// DELETE /accounts/delete?id=|name=
pub async fn delete_account<R>(
    State(state): State<AccountAppState<R>>,
    Extension(caller): Extension<AuthUser>,
    Query(query): Query<DeleteAccountQuery>,
) -> AccountResult<Json<DeleteAccountResponse>>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let use_case = DeleteAccountUseCase::new(state.repo.clone());

    use_case
        .execute(
            caller.user_id,
            DeleteAccountInput {
                id: query.id,
                name: query.name,
            },
        )
        .await?;

    Ok(Json(DeleteAccountResponse {
        result: true,
        message: "Compte supprimé avec succès.".to_string(),
    }))
}
