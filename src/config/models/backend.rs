//! Backend configuration

use super::*;
use crate::core::providers::BackendKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration of one text-generation backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Unique name, referenced by routes
    pub name: String,
    /// Backend family
    pub kind: BackendKind,
    /// API key (falls back to the kind's environment variable)
    #[serde(default)]
    pub api_key: Option<String>,
    /// API base URL (falls back to the kind's public endpoint)
    #[serde(default)]
    pub api_base: Option<String>,
    /// Model used when routing did not resolve one
    #[serde(default)]
    pub default_model: Option<String>,
    /// Models advertised in the catalog
    #[serde(default)]
    pub models: Vec<String>,
    /// Time allowed to connect and receive response headers, in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Whether the backend is offered to the router
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl BackendConfig {
    pub fn new<S: Into<String>>(name: S, kind: BackendKind) -> Self {
        Self {
            name: name.into(),
            kind,
            api_key: None,
            api_base: None,
            default_model: None,
            models: Vec::new(),
            timeout: default_timeout(),
            enabled: true,
            headers: HashMap::new(),
        }
    }

    /// Get API key with environment variable fallback
    pub fn get_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(self.kind.api_key_env()).ok())
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }

    pub fn get_api_base(&self) -> String {
        self.api_base
            .clone()
            .unwrap_or_else(|| self.kind.default_api_base().to_string())
    }

    pub fn get_default_model(&self) -> String {
        self.default_model
            .clone()
            .unwrap_or_else(|| self.kind.default_model().to_string())
    }

    /// Models listed in the catalog, the default model when none are configured
    pub fn routable_models(&self) -> Vec<String> {
        if self.models.is_empty() {
            vec![self.get_default_model()]
        } else {
            self.models.clone()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Backend name cannot be empty".to_string());
        }

        if self.timeout == 0 {
            return Err(format!("Timeout for backend {} must be greater than 0", self.name));
        }

        if let Some(api_base) = &self.api_base {
            if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
                return Err(format!(
                    "API base for backend {} must be an http(s) URL: {}",
                    self.name, api_base
                ));
            }
        }

        Ok(())
    }
}

/// Backends used when the configuration does not define any
pub fn default_backends() -> Vec<BackendConfig> {
    vec![
        BackendConfig::new("groq", BackendKind::Groq),
        BackendConfig::new("cerebras", BackendKind::Cerebras),
        BackendConfig::new("openrouter", BackendKind::OpenRouter),
    ]
}
