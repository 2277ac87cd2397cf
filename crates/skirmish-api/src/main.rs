//! Skirmish battle menu API server entry point.

use skirmish_api::config::ServerConfig;
use skirmish_api::error::AppError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Skirmish API server");

    let config = ServerConfig::from_env()?;

    skirmish_api::serve(&config).await
}
