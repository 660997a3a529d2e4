//! Account module: domain records, repository, request context, response envelope and service.
//!
//! A lookup validates the request, resolves the account by its business key,
//! resolves its contacts and returns an [`response::AccountResponse`] that carries
//! either the payload or a status code with a message.

pub mod context;
pub mod domain;
pub mod errors;
pub mod repo;
pub mod repository;
pub mod response;
pub mod service;
pub mod status;

pub use errors::AccountError;
pub use service::{AccountService, AccountServiceConfig};
pub use status::ReturnCode;
