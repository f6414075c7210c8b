#![cfg(test)]
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};

/// Private in-memory database with the lookup schema applied.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = get_unmigrated_db().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Private in-memory database with no tables at all.
pub async fn get_unmigrated_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    Ok(db)
}
