//! `FitCircle` Server - Main Entry Point
//!
//! Fitness coaching community backend.

use anyhow::Result;
use tracing::info;

use fc_server::{api, config, seed};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fc_server=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting FitCircle Server"
    );

    // Build application state
    let state = api::AppState::new(config);

    if state.config.seed_demo_data {
        seed::seed_demo_data(&state)?;
    }

    // Build router
    let app = api::create_router(state.clone());

    // Start server
    let listener = tokio::net::TcpListener::bind(&state.config.bind_address).await?;
    info!(address = %state.config.bind_address, "Server listening");

    // Graceful shutdown handler
    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Received shutdown signal, cleaning up...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");

    Ok(())
}
