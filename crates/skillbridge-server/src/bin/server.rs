//! Skillbridge Server Binary

use anyhow::Result;
use skillbridge_server::{Server, ServerConfig};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env()?;

    // Initialize tracing; RUST_LOG wins over the configured level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    if config.auth.uses_dev_secret() {
        warn!("SKILLBRIDGE_AUTH__JWT_SECRET not set; using insecure dev default");
    }

    info!("Starting Skillbridge Server v{}", env!("CARGO_PKG_VERSION"));

    // Create and run server
    let server = Server::new(config);
    server.run().await?;

    info!("Server shutdown complete");
    Ok(())
}
