//! Planet tracker HTTP server binary.
//!
//! Loads configuration, sets up logging and the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin planet-tracker-server
//!
//! PORT=9000 RUST_LOG=debug cargo run --bin planet-tracker-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8000)
//! - `EPHEMERIS_MODEL`: Ephemeris model (default: vsop87)
//! - `PLANET_TRACKER_CONFIG`: Optional TOML configuration file
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use planet_tracker::config::ServerConfig;
use planet_tracker::http::{create_router, AppState};

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

    info!("Starting planet tracker HTTP server");

    let config = ServerConfig::load()?;
    info!("Using {} ephemeris", config.ephemeris);

    let app = create_router(AppState::new(config.ephemeris));

    let addr = config.bind_address()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
