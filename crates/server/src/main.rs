// ABOUTME: Binary entry point: loads configuration, initializes logging and serves the router.
// ABOUTME: Shuts down gracefully on Ctrl-C.

use anyhow::{Context, Result};
use clap::Parser;
use mirror_server::{build_app, AppState, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,mirror_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::parse();
    tracing::info!(
        source_url = %config.source_url,
        origin = %config.origin,
        mode = ?config.mode,
        "Configuration loaded"
    );

    let client = config
        .build_client()
        .context("Failed to build marketplace client")?;
    let app = build_app(AppState::new(client, config.source_url.clone(), config.mode));

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;
    tracing::info!("Starting server on http://{}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
