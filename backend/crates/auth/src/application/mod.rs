//! Application layer
//!
//! Use cases orchestrating the domain and the token service.

pub mod config;
pub mod sign_in;
pub mod sign_up;
pub mod token;
