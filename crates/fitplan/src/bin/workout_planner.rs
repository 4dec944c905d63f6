//! Interactive web front-end.

use std::sync::Arc;

use anyhow::Context as _;
use fitplan::{
    config::AppConfig,
    export::PdfExporter,
    generator::WorkoutGenerator,
    logging::LoggingConfig,
    web::{AppState, router, session::SessionStore},
};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    LoggingConfig::from_env()
        .init()
        .context("failed to initialise logging")?;
    let config = AppConfig::from_env().context("invalid configuration")?;
    info!(?config, "starting workout planner");

    let state = Arc::new(AppState::new(
        WorkoutGenerator::from_init(config.gemini_adapter()),
        PdfExporter::new(&config.output_dir),
        SessionStore::new(config.history_limit),
    ));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "listening on http://{}", config.bind_addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("workout planner stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
