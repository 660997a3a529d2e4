use thiserror::Error;

/// Failures raised by the storage layer underneath the account repository.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("database error: {0}")]
    Db(String),
}
