//! Service layer exposing account lookups on top of models.
//! - Separates business logic from data access.
//! - Reuses entity definitions in `models` crate.
//! - Folds every failure into the response envelope at the service boundary.

pub mod errors;
pub mod account;
#[cfg(test)]
pub mod test_support;
