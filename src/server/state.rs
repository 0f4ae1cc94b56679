//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::router::Router;
use crate::core::streaming::utils::unix_timestamp;
use crate::core::types::Model;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Everything is behind an `Arc`; cloning the state is cheap and every
/// worker sees the same router cursor.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Backend selection
    pub router: Arc<Router>,
    /// Models served by the routed backends, built once at startup
    pub catalog: Arc<Vec<Model>>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, router: Router) -> Self {
        let catalog = build_catalog(&router);
        Self {
            config: Arc::new(config),
            router: Arc::new(router),
            catalog: Arc::new(catalog),
        }
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Flatten the routable models of every backend, in router order
fn build_catalog(router: &Router) -> Vec<Model> {
    let created = unix_timestamp();
    router
        .backends()
        .iter()
        .flat_map(|backend| {
            backend
                .models()
                .iter()
                .map(move |id| Model::new(id.as_str(), backend.display_name(), created))
        })
        .collect()
}
