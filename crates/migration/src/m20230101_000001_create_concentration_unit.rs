//! Create `concentration_unit` table.
//!
//! Natural string key only; no other attributes.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConcentrationUnit::Table)
                    .if_not_exists()
                    .col(string_len(ConcentrationUnit::ConcentrationCode, 10).primary_key())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ConcentrationUnit::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ConcentrationUnit { Table, ConcentrationCode }
