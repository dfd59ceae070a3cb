use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect, bring the schema up to date and seed when configured.
pub async fn prepare_database(cfg: &AppConfig) -> Result<DatabaseConnection, StartupError> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Database(format!("migrations failed: {}", e)))?;
    if cfg.database.seed_demo_data {
        crate::seed::seed_demo_users(&db)
            .await
            .map_err(|e| StartupError::Database(format!("seeding failed: {}", e)))?;
    }
    Ok(db)
}

pub fn build_app(db: DatabaseConnection) -> Router {
    routes::build_router(AppState::new(db), build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "ctrl+c handler unavailable; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Serve the API with an already loaded configuration until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = prepare_database(&cfg).await?;
    let app = build_app(db);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address: {}", e)))?;
    info!(%addr, in_memory = cfg.database.is_in_memory(), "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}
