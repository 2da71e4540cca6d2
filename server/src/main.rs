mod api;
mod config;
mod relay;

use anyhow::Result;
use config::ServerConfig;
use relay::CommandStore;
use tokio::net::TcpListener;

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = ServerConfig::from_env();
    info!("Relay server starting");
    info!("  bind address: {}", config.bind_addr);
    info!("  history capacity: {}", config.history_capacity);

    let store = CommandStore::with_history_capacity(config.history_capacity);
    let app = api::router(store);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("Listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
