use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use marquee::logging::init_tracing;
use marquee::metrics::{init_metrics, metrics_app};
use marquee::router::init_router;
use marquee::state::AppState;
use marquee_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = AppConfig::from_env();
    let _guard = init_tracing(&config.observability)?;
    let metrics_handle = init_metrics(&config.observability)?;

    let address = config.server.bind_address();
    let state = AppState::from_config(config)?;

    let mut app = init_router(state);
    if let Some(handle) = metrics_handle {
        app = app.merge(metrics_app(handle));
    }

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(address = %address, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
}
