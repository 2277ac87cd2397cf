//! Skirmish: HTTP surface for the battle menu pipeline.
//!
//! Exposes action conversion and selection binding to out-of-process menu
//! and AI clients.

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::AppError;

pub mod config;
pub mod error;
pub mod routes;

/// Builds the application router without transport layers.
pub fn app() -> Router {
    let api = Router::new()
        .merge(routes::selections::router())
        .merge(routes::directives::router());

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", api)
}

/// Binds the configured address and serves the traced router until the
/// process exits.
///
/// # Errors
///
/// Returns `AppError::Config` if the address does not parse, and
/// `AppError::Server` if binding or serving fails.
pub async fn serve(config: &ServerConfig) -> Result<(), AppError> {
    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app().layer(TraceLayer::new_for_http())).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serve_reports_occupied_port_as_server_error() {
        let occupied = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let config = ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: occupied.local_addr().unwrap().port(),
        };

        let result = serve(&config).await;

        assert!(matches!(result, Err(AppError::Server(_))));
    }

    #[tokio::test]
    async fn test_serve_reports_bad_host_as_config_error() {
        let config = ServerConfig {
            host: "not a host".to_owned(),
            port: 3000,
        };

        let result = serve(&config).await;

        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
