use std::collections::{HashMap, HashSet};

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::debug;

use crate::account::domain::{AccountRecord, ContactRecord};
use crate::account::errors::AccountError;
use crate::account::repository::AccountRepository;
use crate::errors::ServiceError;

pub struct SeaOrmAccountRepository {
    pub db: DatabaseConnection,
}

fn to_account(a: models::account::Model) -> AccountRecord {
    AccountRecord { id: a.id, account_number: a.account_number, name: a.name, my_field: a.my_field }
}

fn to_contact(c: models::contact::Model) -> ContactRecord {
    ContactRecord { id: c.id, account_id: c.account_id, name: c.name, is_active: c.is_active }
}

#[async_trait::async_trait]
impl AccountRepository for SeaOrmAccountRepository {
    async fn find_by_keys(&self, keys: &HashSet<String>) -> Result<HashMap<String, AccountRecord>, AccountError> {
        if keys.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = models::account::Entity::find()
            .filter(models::account::Column::AccountNumber.is_in(keys.iter().cloned()))
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        debug!(requested = keys.len(), found = rows.len(), "accounts_by_key");
        Ok(rows.into_iter().map(|a| (a.account_number.clone(), to_account(a))).collect())
    }

    async fn find_related(&self, account: &AccountRecord) -> Result<Vec<ContactRecord>, AccountError> {
        let rows = models::contact::Entity::find()
            .filter(models::contact::Column::AccountId.eq(account.id))
            .order_by_asc(models::contact::Column::CreatedAt)
            .order_by_asc(models::contact::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(rows.into_iter().map(to_contact).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use uuid::Uuid;

    #[tokio::test]
    async fn seaorm_lookup_roundtrip() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let number = format!("svc_{}", Uuid::new_v4());
        let created = models::account::create(&db, &number, "Seeded", Some("x")).await?;
        models::contact::create(&db, created.id, "Bob", true).await?;
        models::contact::create(&db, created.id, "Ann", false).await?;

        let repo = SeaOrmAccountRepository { db: db.clone() };
        let account = repo.find_by_key(&number).await?;
        assert_eq!(account.id, created.id);

        let contacts = repo.find_related(&account).await?;
        assert_eq!(contacts.len(), 2);

        let missing = repo.find_by_key(&format!("missing_{}", Uuid::new_v4())).await;
        assert!(matches!(missing, Err(AccountError::NotFound(_))));

        models::account::Entity::delete_by_id(created.id).exec(&db).await?;
        Ok(())
    }
}
