pub mod account;

pub use account::{Account, AccountChanges, NewAccount};
