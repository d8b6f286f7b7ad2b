// File: services/littlelemon_backend/src/main.rs
use little_lemon_backend::{build_app, AppState};
use little_lemon_common::{config_error, init_with_file, log_result, parse_level, Context};
use little_lemon_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(load_config().map_err(config_error)?);

    let logging = config.logging.clone().unwrap_or_default();
    let level = logging
        .level
        .as_deref()
        .map(parse_level)
        .unwrap_or(Level::INFO);
    // Keep the guard alive so the log file keeps flushing.
    let _guard = init_with_file(level, logging.directory.as_deref());

    let app = build_app(AppState::new(config.clone()));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    log_result(
        axum::serve(listener, app).await,
        "Server stopped",
        "Server error",
    )?;
    Ok(())
}
