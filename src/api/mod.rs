//! HTTP API server for the clipgram gateway

pub mod health;
pub mod webhooks;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{Config, Result};

/// Shared state for API handlers
#[derive(Clone)]
pub struct ApiState {
    /// Resolved gateway configuration
    pub config: Config,
    /// Shared HTTP client for outbound Bot API and extraction-service calls
    pub http: reqwest::Client,
}

/// The gateway HTTP server
pub struct ApiServer {
    state: Arc<ApiState>,
}

impl ApiServer {
    /// Create a server from resolved configuration
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            state: Arc::new(ApiState {
                config,
                http: reqwest::Client::new(),
            }),
        }
    }

    /// Build the router with all routes
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .merge(webhooks::router(self.state.clone()))
            .merge(health::router())
            .layer(TraceLayer::new_for_http())
    }

    /// Run the API server
    ///
    /// # Errors
    ///
    /// Returns error if the server fails to bind or run
    pub async fn run(self) -> Result<()> {
        let addr = format!("0.0.0.0:{}", self.state.config.port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| crate::Error::Config(format!("failed to bind API server: {e}")))?;

        tracing::info!(port = self.state.config.port, "API server listening");

        axum::serve(listener, self.router())
            .await
            .map_err(|e| crate::Error::Config(format!("API server error: {e}")))?;

        Ok(())
    }
}
