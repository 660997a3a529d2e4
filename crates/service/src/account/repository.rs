use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use super::domain::{AccountRecord, ContactRecord};
use super::errors::AccountError;

/// Read-only access to accounts and their contacts.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Accounts whose business key is in `keys`, keyed by business key. Misses are omitted.
    async fn find_by_keys(&self, keys: &HashSet<String>) -> Result<HashMap<String, AccountRecord>, AccountError>;

    /// Contacts of `account`, oldest first. Empty when it has none.
    async fn find_related(&self, account: &AccountRecord) -> Result<Vec<ContactRecord>, AccountError>;

    /// Single-key form of [`find_by_keys`](Self::find_by_keys); `NotFound` when the key has no match.
    async fn find_by_key(&self, key: &str) -> Result<AccountRecord, AccountError> {
        let keys = HashSet::from([key.to_string()]);
        let mut found = self.find_by_keys(&keys).await?;
        found.remove(key).ok_or_else(|| AccountError::not_found(key))
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Mutex, MutexGuard};
    use uuid::Uuid;

    #[derive(Default)]
    pub struct MockAccountRepository {
        accounts: Mutex<HashMap<String, AccountRecord>>, // key: account_number
        contacts: Mutex<Vec<ContactRecord>>,             // insertion order
        lookup_failure: Mutex<Option<String>>,
        related_failure: Mutex<Option<String>>,
        key_queries: AtomicUsize,
        related_queries: AtomicUsize,
    }

    fn guard<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
        m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    impl MockAccountRepository {
        pub fn insert_account(&self, account_number: &str, name: &str, my_field: Option<&str>) -> AccountRecord {
            let account = AccountRecord {
                id: Uuid::new_v4(),
                account_number: account_number.to_string(),
                name: name.to_string(),
                my_field: my_field.map(str::to_string),
            };
            guard(&self.accounts).insert(account.account_number.clone(), account.clone());
            account
        }

        pub fn insert_contact(&self, account: &AccountRecord, name: &str, is_active: bool) -> ContactRecord {
            let contact = ContactRecord { id: Uuid::new_v4(), account_id: account.id, name: name.to_string(), is_active };
            guard(&self.contacts).push(contact.clone());
            contact
        }

        /// Make every account lookup fail with `message`.
        pub fn fail_lookups(&self, message: &str) {
            *guard(&self.lookup_failure) = Some(message.to_string());
        }

        /// Make every contact lookup fail with `message`.
        pub fn fail_related(&self, message: &str) {
            *guard(&self.related_failure) = Some(message.to_string());
        }

        /// Number of `find_by_keys` calls served so far.
        pub fn key_queries(&self) -> usize {
            self.key_queries.load(Ordering::SeqCst)
        }

        /// Number of `find_related` calls served so far.
        pub fn related_queries(&self) -> usize {
            self.related_queries.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AccountRepository for MockAccountRepository {
        async fn find_by_keys(&self, keys: &HashSet<String>) -> Result<HashMap<String, AccountRecord>, AccountError> {
            self.key_queries.fetch_add(1, Ordering::SeqCst);
            if let Some(msg) = guard(&self.lookup_failure).clone() {
                return Err(AccountError::Unexpected(msg));
            }
            let accounts = guard(&self.accounts);
            Ok(keys
                .iter()
                .filter_map(|k| accounts.get(k).map(|a| (k.clone(), a.clone())))
                .collect())
        }

        async fn find_related(&self, account: &AccountRecord) -> Result<Vec<ContactRecord>, AccountError> {
            self.related_queries.fetch_add(1, Ordering::SeqCst);
            if let Some(msg) = guard(&self.related_failure).clone() {
                return Err(AccountError::Unexpected(msg));
            }
            Ok(guard(&self.contacts)
                .iter()
                .filter(|c| c.account_id == account.id)
                .cloned()
                .collect())
        }
    }
}
