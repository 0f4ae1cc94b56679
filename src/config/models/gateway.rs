//! Main gateway configuration

#![allow(missing_docs)]

use super::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Backends in round-robin order
    #[serde(default = "default_backends")]
    pub backends: Vec<BackendConfig>,
    /// Model-prefix routing table, matched in order
    #[serde(default = "default_routes")]
    pub routes: Vec<RouteConfig>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            backends: default_backends(),
            routes: default_routes(),
        }
    }
}

impl GatewayConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.server.validate()?;

        if self.backends.is_empty() {
            return Err("At least one backend must be configured".to_string());
        }

        let mut backend_names = HashSet::new();
        for backend in &self.backends {
            backend.validate()?;
            if !backend_names.insert(backend.name.as_str()) {
                return Err(format!("Duplicate backend name: {}", backend.name));
            }
        }

        for route in &self.routes {
            if route.prefix.is_empty() {
                return Err(format!(
                    "Route to backend {} has an empty prefix",
                    route.backend
                ));
            }
            if !backend_names.contains(route.backend.as_str()) {
                return Err(format!(
                    "Route {} references unknown backend: {}",
                    route.prefix, route.backend
                ));
            }
        }

        Ok(())
    }

    /// Look up a backend by name
    pub fn backend(&self, name: &str) -> Option<&BackendConfig> {
        self.backends.iter().find(|backend| backend.name == name)
    }
}
