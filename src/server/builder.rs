//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function used by the binary.

use crate::config::Config;
use crate::core::providers::{ChatBackend, create_backends};
use crate::core::router::Router;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    backends: Option<Vec<Arc<dyn ChatBackend>>>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use these backends instead of creating them from configuration
    pub fn with_backends(mut self, backends: Vec<Arc<dyn ChatBackend>>) -> Self {
        self.backends = Some(backends);
        self
    }

    /// Build the router
    pub fn build_router(&self) -> Result<Router> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;

        let backends = match &self.backends {
            Some(backends) => backends.clone(),
            None => create_backends(config.backends())?,
        };

        Router::new(backends, config.routes())
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let router = self.build_router()?;
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;

        Ok(HttpServer::new(&config, router))
    }
}

/// Build every component from `config` and serve until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    let server = ServerBuilder::new().with_config(config).build()?;

    info!("Server starting at: http://{}", server.config().address());
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   GET  /v1/models - Model list");
    info!("   POST /v1/chat/completions - Chat completions");
    info!("   POST /chat - Unframed chat stream");

    server.start().await
}
