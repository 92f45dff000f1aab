//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (bcrypt, salted, fixed work factor)
//! - Bearer token extraction from HTTP headers

pub mod bearer;
pub mod password;
