//! Create `country` table.
//!
//! Keyed by country code; postal/phone patterns are optional.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Country::Table)
                    .if_not_exists()
                    .col(string_len(Country::CountryCode, 10).primary_key())
                    .col(string_len(Country::Name, 50).not_null())
                    .col(ColumnDef::new(Country::PostalPattern).string_len(50).null())
                    .col(ColumnDef::new(Country::PhonePattern).string_len(50).null())
                    .col(double(Country::FederalSalesTax).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Country::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Country { Table, CountryCode, Name, PostalPattern, PhonePattern, FederalSalesTax }
