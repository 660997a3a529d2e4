//! Shared helpers used across the account service crates.

pub mod types;
pub mod utils;
