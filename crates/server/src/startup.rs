use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use migration::{Migrator, MigratorTrait};
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid bind address {0}")]
    BindAddr(String),
    #[error("database connection failed: {0}")]
    Connect(anyhow::Error),
    #[error("migration failed: {0}")]
    Migrate(#[from] sea_orm::DbErr),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let raw = format!("{}:{}", cfg.server.host, cfg.server.port);
    raw.parse().map_err(|_| StartupError::BindAddr(raw))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Connect, optionally migrate, and build the router.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let db = models::db::connect_with_config(&cfg.database).await.map_err(StartupError::Connect)?;
    if cfg.database.auto_migrate {
        Migrator::up(&db, None).await?;
        info!("migrations applied");
    }
    Ok(routes::build_router(db, build_cors()))
}

/// Public entry: build the app and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let app = build_app(&cfg).await?;
    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "starting server");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() {
        let mut cfg = AppConfig::default();
        assert_eq!(bind_addr(&cfg).unwrap().port(), 8080);
        cfg.server.host = "not a host".into();
        assert!(matches!(bind_addr(&cfg), Err(StartupError::BindAddr(_))));
    }
}
