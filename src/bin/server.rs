//! Catalog HTTP Server Binary
//!
//! Entry point for the catalog REST API server. It resolves configuration
//! once, builds the artifact store, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin catalog-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8000)
//! - `CATALOG_DATA_DIR`: Base directory for the artifact (default: the
//!   install location of the binary)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use catalog_rust::config::ServerConfig;
use catalog_rust::http::{create_router, AppState};
use catalog_rust::store::ArtifactStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting catalog HTTP server");

    // Resolve configuration once; nothing below re-reads the environment.
    let config = ServerConfig::from_env()?;
    let store = ArtifactStore::new(config.artifact_candidates.clone());
    if !store.available() {
        info!("artifact not present yet; endpoints will report an error until the transform runs");
    }

    let state = AppState::new(store);
    let app = create_router(state, &config);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
