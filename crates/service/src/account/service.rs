use std::sync::Arc;

use tracing::{error, field, info, instrument, warn, Span};

use super::context::{ensure_valid, AccountContext};
use super::domain::AccountRequest;
use super::errors::AccountError;
use super::repository::AccountRepository;
use super::response::AccountResponse;
use super::status::ReturnCode;

const OPAQUE_INTERNAL_MESSAGE: &str = "internal error";

/// Account service configuration
#[derive(Debug, Clone, Default)]
pub struct AccountServiceConfig {
    /// Put raw failure text into 500 envelopes. Off by default; the text is always logged.
    pub expose_internal_errors: bool,
}

/// Account lookup service independent of web framework
pub struct AccountService<R: AccountRepository + ?Sized> {
    repo: Arc<R>,
    cfg: AccountServiceConfig,
}

impl<R: AccountRepository + ?Sized> AccountService<R> {
    pub fn new(repo: Arc<R>, cfg: AccountServiceConfig) -> Self { Self { repo, cfg } }

    /// Look up an account with its contacts.
    ///
    /// Always returns an envelope: failures become `returnCode` 400, 404 or 500 with a message.
    ///
    /// # Examples
    /// ```
    /// use service::account::{AccountService, AccountServiceConfig, repository::mock::MockAccountRepository};
    /// use service::account::domain::AccountRequest;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAccountRepository::default());
    /// let acme = repo.insert_account("A100", "Acme", Some("gold"));
    /// repo.insert_contact(&acme, "Bob", true);
    /// let svc = AccountService::new(repo, AccountServiceConfig::default());
    /// let resp = tokio_test::block_on(svc.get_account(Some(AccountRequest::new("A100"))));
    /// assert_eq!(resp.name.as_deref(), Some("Acme"));
    /// assert_eq!(resp.contacts.map(|c| c.len()), Some(1));
    ///
    /// let missing = tokio_test::block_on(svc.get_account(Some(AccountRequest::new("ZZZ"))));
    /// assert_eq!(missing.return_code.map(|c| c.code()), Some(404));
    /// ```
    #[instrument(skip(self, request), fields(account_number = field::Empty))]
    pub async fn get_account(&self, request: Option<AccountRequest>) -> AccountResponse {
        match self.lookup(request.as_ref()).await {
            Ok(response) => response,
            Err(err) => self.failure(err),
        }
    }

    async fn lookup(&self, request: Option<&AccountRequest>) -> Result<AccountResponse, AccountError> {
        let account_number = ensure_valid(request)?;
        Span::current().record("account_number", account_number);

        let ctx = AccountContext::new(self.repo.as_ref(), account_number);
        let mut response = AccountResponse::from_account(ctx.primary().await?);
        let contacts = ctx.related().await?;
        response.add_contacts(contacts);

        info!(contacts = contacts.len(), "account_resolved");
        Ok(response)
    }

    fn failure(&self, err: AccountError) -> AccountResponse {
        let code = err.return_code();
        match &err {
            AccountError::Validation(_) | AccountError::NotFound(_) => {
                warn!(return_code = code.code(), error = %err, "account_lookup_rejected");
                AccountResponse::failure(&err)
            }
            AccountError::Unexpected(_) => {
                error!(return_code = code.code(), error = %err, "account_lookup_failed");
                if self.cfg.expose_internal_errors {
                    AccountResponse::failure(&err)
                } else {
                    AccountResponse::status(ReturnCode::Internal, OPAQUE_INTERNAL_MESSAGE)
                }
            }
        }
    }
}
