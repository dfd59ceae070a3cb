

use anyhow::Result;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Fresh migrated in-memory store per test
pub(crate) async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = crate::db::connect_with_config(&DatabaseConfig::in_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
