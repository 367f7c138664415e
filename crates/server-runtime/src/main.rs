//! # Dataplane Server
//!
//! The main entry point for the data-block ingestion server.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging
//! 2. Load configuration (defaults + env overrides) and validate it
//! 3. Open the file-backed block store
//! 4. Build the pooled data-lake client and relay sink
//! 5. Bind the HTTP listener and serve until Ctrl+C

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use dp_ingestion::{IngestionService, RelaySink};
use server_runtime::{FileBackedBlockStore, HttpDataLakeClient, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load and validate configuration
    let config = ServerConfig::from_env();
    config.validate().context("invalid configuration")?;

    info!("===========================================");
    info!("  Dataplane Server v0.1.0");
    info!("===========================================");
    info!("HTTP Addr: {}", config.http_addr());
    info!("Data Lake: {}", config.datalake.url);
    info!("Data File: {}", config.storage.data_file.display());

    // Open the persistent store
    let store = Arc::new(
        FileBackedBlockStore::open(&config.storage.data_file)
            .context("failed to open block store")?,
    );
    info!("Block store opened with {} record(s)", store.len());

    // Build the outbound data-lake client and bounded relay
    let lake = HttpDataLakeClient::new(
        config.datalake.url.clone(),
        config.connect_timeout(),
        config.request_timeout(),
    )
    .context("failed to build data-lake client")?;
    let relay = RelaySink::new(Arc::new(lake), config.datalake.max_in_flight);

    // Wire the ingestion service behind the HTTP surface
    let service = Arc::new(IngestionService::new(store, relay));
    let app = server_runtime::routes::router(service, config.http.max_body_bytes);

    let listener = tokio::net::TcpListener::bind(config.http_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.http_addr()))?;

    info!("Server is running. Press Ctrl+C to stop.");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl+C: {}", e);
    }
}
