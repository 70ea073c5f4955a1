use tt_core::{Clock, SystemClock};
use tt_db::PoolOptions;
use tt_server::{AppState, ServerError, ServerErrorResult, build_router, logger};

use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // Local .env is optional
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = tt_config::Config::load()?;
    config.validate()?;

    // Ensure log directory exists before the file sink opens
    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ServerError::io(format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting tt-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool and run migrations
    let database_path = config.database_path()?;
    let pool_options = PoolOptions {
        max_connections: config.database.max_connections,
        busy_timeout: config.database.busy_timeout(),
    };
    let pool = tt_db::create_pool(&database_path, &pool_options).await?;
    info!("Database connection established");

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    let app_state = AppState::new(pool.clone(), clock, config.api.clone());
    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| ServerError::io(format!("Failed to bind {}: {}", bind_addr, e)))?;

    // Actual bound address matters when port is 0
    let actual_addr = listener
        .local_addr()
        .map_err(|e| ServerError::io(format!("Failed to read bound address: {}", e)))?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::io(format!("Server error: {}", e)))?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
