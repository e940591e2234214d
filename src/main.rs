use std::sync::Arc;

use tracing::{info, warn};

use layout_sessions::adapters::http::{api_router, SessionAppState};
use layout_sessions::adapters::sqlite::{apply_schema, connect_pool, SqliteSessionRepository};
use layout_sessions::config::AppConfig;
use layout_sessions::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    telemetry::init_tracing(&config.server)?;

    let pool = connect_pool(&config.database).await?;
    if config.database.run_migrations {
        apply_schema(&pool).await?;
    }

    let repository = Arc::new(SqliteSessionRepository::new(pool.clone()));
    let app = api_router(SessionAppState::new(repository), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Starting layout-sessions");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
