use thiserror::Error;

use super::status::ReturnCode;
use crate::errors::ServiceError;

/// Failure kinds of an account lookup. Each maps to one envelope status.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AccountError {
    pub fn not_found(account_number: &str) -> Self {
        Self::NotFound(format!("no account with accountNumber '{}'", account_number))
    }

    pub fn return_code(&self) -> ReturnCode {
        match self {
            AccountError::Validation(_) => ReturnCode::Bad,
            AccountError::NotFound(_) => ReturnCode::NotFound,
            AccountError::Unexpected(_) => ReturnCode::Internal,
        }
    }

    /// Failure text without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            AccountError::Validation(m) | AccountError::NotFound(m) | AccountError::Unexpected(m) => m,
        }
    }
}

impl From<ServiceError> for AccountError {
    fn from(e: ServiceError) -> Self {
        AccountError::Unexpected(e.to_string())
    }
}
