use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::errors::ModelError;

/// Pool options come from config; an in-memory store keeps its single connection alive.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, ModelError> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);

    if cfg.is_in_memory() {
        // the data lives exactly as long as the one pooled connection
        opt.idle_timeout(Duration::from_secs(u32::MAX as u64))
            .max_lifetime(Duration::from_secs(u32::MAX as u64));
    } else {
        opt.idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }

    let db = Database::connect(opt).await?;
    info!(in_memory = cfg.is_in_memory(), max_connections = cfg.max_connections, "database connected");
    Ok(db)
}
