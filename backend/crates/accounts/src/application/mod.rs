//! Application layer
//!
//! Account CRUD use cases. Update and delete share the ownership guard:
//! resolve the account first, compare the owner with the caller, and
//! only then touch the row.

pub mod create;
pub mod delete;
pub mod list;
pub mod update;

pub use create::{CreateAccountInput, CreateAccountUseCase};
pub use delete::{DeleteAccountInput, DeleteAccountUseCase};
pub use list::ListAccountsUseCase;
pub use update::{UpdateAccountInput, UpdateAccountUseCase};
