//! Create `dispensing_unit` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DispensingUnit::Table)
                    .if_not_exists()
                    .col(string_len(DispensingUnit::DispensingCode, 10).primary_key())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(DispensingUnit::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum DispensingUnit { Table, DispensingCode }
