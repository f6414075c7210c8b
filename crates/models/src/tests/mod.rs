

/// Insert/update/delete through the active models each entity produces
pub mod crud_tests;

use sea_orm::DatabaseConnection;
use migration::MigratorTrait;

use crate::db::{connect_with_config, DatabaseConfig};

/// Fresh in-memory database with the schema applied.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
