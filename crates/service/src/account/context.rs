use tokio::sync::OnceCell;
use tracing::debug;

use common::utils::text::is_blank;

use super::domain::{AccountRecord, AccountRequest, ContactRecord};
use super::errors::AccountError;
use super::repository::AccountRepository;

/// Check that a request is present and names an account.
///
/// Returns the account number on success.
pub fn ensure_valid(request: Option<&AccountRequest>) -> Result<&str, AccountError> {
    let request = request.ok_or_else(|| AccountError::Validation("request context is required".into()))?;
    let key = request.account_number.as_deref();
    if is_blank(key) {
        return Err(AccountError::Validation("accountNumber is required".into()));
    }
    Ok(key.unwrap_or_default())
}

/// Per-request view over the repository.
///
/// The account and its contacts are fetched on first access and cached for
/// the lifetime of the context; building a context touches no storage.
pub struct AccountContext<'a, R: AccountRepository + ?Sized> {
    account_number: String,
    repo: &'a R,
    account: OnceCell<AccountRecord>,
    contacts: OnceCell<Vec<ContactRecord>>,
}

impl<'a, R: AccountRepository + ?Sized> AccountContext<'a, R> {
    pub fn new(repo: &'a R, account_number: impl Into<String>) -> Self {
        Self { account_number: account_number.into(), repo, account: OnceCell::new(), contacts: OnceCell::new() }
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// The account named by this context. `NotFound` if the key has no match.
    pub async fn primary(&self) -> Result<&AccountRecord, AccountError> {
        self.account
            .get_or_try_init(|| async {
                debug!(account_number = %self.account_number, "resolving account");
                self.repo.find_by_key(&self.account_number).await
            })
            .await
    }

    /// Contacts of the account, resolving the account first if needed.
    pub async fn related(&self) -> Result<&[ContactRecord], AccountError> {
        let contacts = self
            .contacts
            .get_or_try_init(|| async {
                let account = self.primary().await?;
                debug!(account_id = %account.id, "resolving contacts");
                self.repo.find_related(account).await
            })
            .await?;
        Ok(contacts.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::repository::mock::MockAccountRepository;

    fn repo_with_contacts() -> MockAccountRepository {
        let repo = MockAccountRepository::default();
        let acme = repo.insert_account("A100", "Acme", None);
        repo.insert_contact(&acme, "Bob", true);
        repo
    }

    #[test]
    fn absent_request_is_invalid() {
        assert!(matches!(ensure_valid(None), Err(AccountError::Validation(_))));
    }

    #[test]
    fn blank_or_missing_key_is_invalid() {
        for req in [AccountRequest::default(), AccountRequest::new(""), AccountRequest::new("   ")] {
            assert!(matches!(ensure_valid(Some(&req)), Err(AccountError::Validation(_))));
        }
    }

    #[test]
    fn present_key_is_returned() {
        let req = AccountRequest::new("A100");
        assert_eq!(ensure_valid(Some(&req)).unwrap(), "A100");
    }

    #[tokio::test]
    async fn construction_does_not_query() {
        let repo = repo_with_contacts();
        let ctx = AccountContext::new(&repo, "A100");
        assert_eq!(ctx.account_number(), "A100");
        assert_eq!(repo.key_queries(), 0);
        assert_eq!(repo.related_queries(), 0);
    }

    #[tokio::test]
    async fn accessors_query_at_most_once() {
        let repo = repo_with_contacts();
        let ctx = AccountContext::new(&repo, "A100");

        let first = ctx.primary().await.unwrap().clone();
        let second = ctx.primary().await.unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(repo.key_queries(), 1);

        assert_eq!(ctx.related().await.unwrap().len(), 1);
        assert_eq!(ctx.related().await.unwrap().len(), 1);
        assert_eq!(repo.related_queries(), 1);
        assert_eq!(repo.key_queries(), 1);
    }

    #[tokio::test]
    async fn related_resolves_primary_first() {
        let repo = repo_with_contacts();
        let ctx = AccountContext::new(&repo, "A100");

        let contacts = ctx.related().await.unwrap();
        assert_eq!(contacts[0].name, "Bob");
        assert_eq!(repo.key_queries(), 1);

        ctx.primary().await.unwrap();
        assert_eq!(repo.key_queries(), 1);
    }

    #[tokio::test]
    async fn unknown_key_is_not_found_from_both_accessors() {
        let repo = repo_with_contacts();
        let ctx = AccountContext::new(&repo, "ZZZ");
        assert!(matches!(ctx.primary().await, Err(AccountError::NotFound(_))));
        assert!(matches!(ctx.related().await, Err(AccountError::NotFound(_))));
        assert_eq!(repo.related_queries(), 0);
    }
}
