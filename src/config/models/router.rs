//! Routing table configuration

use serde::{Deserialize, Serialize};

/// Model-name prefix routed to a named backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub prefix: String,
    pub backend: String,
}

impl RouteConfig {
    pub fn new<P: Into<String>, B: Into<String>>(prefix: P, backend: B) -> Self {
        Self {
            prefix: prefix.into(),
            backend: backend.into(),
        }
    }
}

/// Routing table used when the configuration does not define one
pub fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::new("moonshotai", "groq"),
        RouteConfig::new("gpt-oss-120b", "cerebras"),
        RouteConfig::new("xiaomi", "openrouter"),
    ]
}
