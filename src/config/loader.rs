//! Configuration loading utilities
//!
//! Builds a configuration from environment variables alone. Backend API keys
//! are not read here; they are resolved from `GROQ_API_KEY`,
//! `CEREBRAS_API_KEY` and `OPENROUTER_API_KEY` when backends are created.

use super::models::*;
use crate::utils::error::{GatewayError, Result};
use std::env;
use tracing::debug;

impl GatewayConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment variables");

        let mut config = Self::default();

        // Server configuration
        if let Ok(host) = env::var("GATEWAY_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            config.server.port = port
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid port: {}", e)))?;
        }
        if let Ok(workers) = env::var("GATEWAY_WORKERS") {
            config.server.workers = Some(workers.parse().map_err(|e| {
                GatewayError::Config(format!("Invalid workers count: {}", e))
            })?);
        }
        if let Ok(size) = env::var("GATEWAY_MAX_BODY_SIZE") {
            config.server.max_body_size = size
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid max body size: {}", e)))?;
        }

        // Logging configuration
        if let Ok(level) = env::var("LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Ok(format) = env::var("LOG_FORMAT") {
            config.logging.format = format.parse().map_err(GatewayError::Config)?;
        }

        debug!("Configuration loaded from environment variables");
        Ok(config)
    }
}
