//! HTTP surface of the analyzer
//!
//! A [`ServerConfig`] is built once at startup and owns everything the
//! server needs: bind address, body limit, CORS policy and the route table.
//! Nothing is mutated after that; each request is handled independently.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use std::future::Future;
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub mod error;
pub mod handlers;

pub use error::ApiError;

/// Route of the liveness check
pub const HEALTH_ROUTE: &str = "/";
/// Route of the pipeline analysis endpoint
pub const PARSE_ROUTE: &str = "/pipelines/parse";

/// Server startup and runtime errors
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        source: std::io::Error,
    },

    #[error("Failed to read listener address: {source}")]
    LocalAddr { source: std::io::Error },

    #[error("Server terminated with error: {source}")]
    Serve { source: std::io::Error },
}

/// Startup configuration of the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    addr: SocketAddr,
    body_limit: usize,
}

impl ServerConfig {
    /// Default maximum request body size (2 MiB)
    pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

    pub fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            body_limit: Self::DEFAULT_BODY_LIMIT,
        }
    }

    pub fn with_body_limit(mut self, body_limit: usize) -> Self {
        self.body_limit = body_limit;
        self
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn body_limit(&self) -> usize {
        self.body_limit
    }

    /// Cross-origin policy: every origin, method and header is allowed
    ///
    /// Origins, methods and headers are mirrored from the request rather
    /// than answered with `*`, which browsers refuse on credentialed requests.
    pub fn cors_layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    }

    /// Build the route table with its middleware stack
    pub fn router(&self) -> Router {
        Router::new()
            .route(HEALTH_ROUTE, get(handlers::read_root))
            .route(PARSE_ROUTE, post(handlers::parse_pipeline))
            .layer(DefaultBodyLimit::max(self.body_limit))
            .layer(TraceLayer::new_for_http())
            .layer(self.cors_layer())
    }
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let listener = TcpListener::bind(config.addr())
        .await
        .map_err(|source| ServerError::Bind {
            address: config.addr(),
            source,
        })?;

    serve_on(listener, &config, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve_on<F>(
    listener: TcpListener,
    config: &ServerConfig,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener
        .local_addr()
        .map_err(|source| ServerError::LocalAddr { source })?;

    info!(
        address = %local_addr,
        body_limit = config.body_limit(),
        "pipescan listening"
    );

    axum::serve(listener, config.router())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|source| ServerError::Serve { source })?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolve on Ctrl+C, or SIGTERM on unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
