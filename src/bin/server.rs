//! FieldOps HTTP Server Binary
//!
//! This is the main entry point for the FieldOps REST API server.
//! It loads the configuration, initializes the repository, sets up the
//! HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin fieldops-server --features http-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `SEED_DEMO_DATA`: Seed the repository with demo records at startup
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use fieldops::config::ServerConfig;
use fieldops::db::{seed, FullRepository, MemoryRepository};
use fieldops::http::{create_router, AppState};

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
        .with_thread_ids(true)
        .init();

    info!("Starting FieldOps HTTP Server");

    // Load configuration, falling back to defaults when no file is present
    let mut config = match ServerConfig::from_default_location() {
        Ok(config) => config,
        Err(e) => {
            info!("Using default configuration ({})", e);
            ServerConfig::default()
        }
    };
    config.apply_env_overrides();

    // Initialize the repository, optionally seeded with demo records
    let repository = MemoryRepository::new();
    if config.server.seed_demo_data {
        seed::seed_demo_data(&repository).await?;
        info!("Demo data seeded");
    }
    let repository: Arc<dyn FullRepository> = Arc::new(repository);
    info!("Repository initialized successfully");

    // Create application state
    let state = AppState::new(repository);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let addr: SocketAddr = config.bind_address().parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
