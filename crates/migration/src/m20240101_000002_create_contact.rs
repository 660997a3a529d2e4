//! Create `contact` table with FK to `account`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(uuid(Contact::Id).primary_key())
                    .col(uuid(Contact::AccountId).not_null())
                    .col(string_len(Contact::Name, 255).not_null())
                    .col(boolean(Contact::IsActive).not_null().default(true))
                    .col(timestamp_with_time_zone(Contact::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contact_account")
                            .from(Contact::Table, Contact::AccountId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contact_account_id")
                    .table(Contact::Table)
                    .col(Contact::AccountId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contact::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Contact { Table, Id, AccountId, Name, IsActive, CreatedAt }

#[derive(DeriveIden)]
enum Account { Table, Id }
