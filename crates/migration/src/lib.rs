//! Migrator for the lookup tables. Every table is independent, so the
//! order below is only the order they were introduced in.
pub use sea_orm_migration::prelude::*;

mod m20230101_000001_create_concentration_unit;
mod m20230101_000002_create_country;
mod m20230101_000003_create_diagnosis_category;
mod m20230101_000004_create_dispensing_unit;
mod m20230101_000005_create_medication_type;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20230101_000001_create_concentration_unit::Migration),
            Box::new(m20230101_000002_create_country::Migration),
            Box::new(m20230101_000003_create_diagnosis_category::Migration),
            Box::new(m20230101_000004_create_dispensing_unit::Migration),
            Box::new(m20230101_000005_create_medication_type::Migration),
        ]
    }
}
