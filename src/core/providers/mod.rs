//! Backend implementations
//!
//! Every backend is reduced to one capability: given a conversation and an
//! optional model, open a lazy stream of text increments. The router, the
//! streaming pipeline and the handlers only ever see [`ChatBackend`].

// Base infrastructure
pub mod base;
pub mod error;

// Backend modules
pub mod cerebras;
pub mod groq;
pub mod openrouter;

#[cfg(test)]
pub(crate) mod mock;

pub use base::{BackendChunk, BackendSettings, OpenAICompatibleBackend};
pub use error::BackendError;

use crate::config::BackendConfig;
use crate::core::types::ChatMessage;
use crate::utils::error::Result;
use async_trait::async_trait;
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Lazy sequence of text increments produced by a backend
pub type TextStream = BoxStream<'static, std::result::Result<String, BackendError>>;

/// Uniform chat capability offered by every backend
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Unique backend name used in logs and the routing table
    fn name(&self) -> &str;

    /// Name reported as `owned_by` in the model catalog
    fn display_name(&self) -> &str {
        self.name()
    }

    /// Model identifiers this backend is known to serve
    fn models(&self) -> &[String] {
        &[]
    }

    /// Open a stream of text increments for `messages`
    ///
    /// `model` is the resolved model from routing; backends fall back to
    /// their default model when it is absent.
    async fn chat(
        &self,
        messages: &[ChatMessage],
        model: Option<&str>,
    ) -> std::result::Result<TextStream, BackendError>;
}

/// Supported backend families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Groq,
    Cerebras,
    OpenRouter,
}

impl BackendKind {
    pub fn display_name(self) -> &'static str {
        match self {
            BackendKind::Groq => groq::DISPLAY_NAME,
            BackendKind::Cerebras => cerebras::DISPLAY_NAME,
            BackendKind::OpenRouter => openrouter::DISPLAY_NAME,
        }
    }

    pub fn default_api_base(self) -> &'static str {
        match self {
            BackendKind::Groq => groq::DEFAULT_API_BASE,
            BackendKind::Cerebras => cerebras::DEFAULT_API_BASE,
            BackendKind::OpenRouter => openrouter::DEFAULT_API_BASE,
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            BackendKind::Groq => groq::DEFAULT_MODEL,
            BackendKind::Cerebras => cerebras::DEFAULT_MODEL,
            BackendKind::OpenRouter => openrouter::DEFAULT_MODEL,
        }
    }

    /// Environment variable holding the API key
    pub fn api_key_env(self) -> &'static str {
        match self {
            BackendKind::Groq => groq::API_KEY_ENV,
            BackendKind::Cerebras => cerebras::API_KEY_ENV,
            BackendKind::OpenRouter => openrouter::API_KEY_ENV,
        }
    }

    /// Fixed parameters merged into every request body
    pub fn request_params(self) -> Map<String, Value> {
        match self {
            BackendKind::Groq => groq::request_params(),
            BackendKind::Cerebras => cerebras::request_params(),
            BackendKind::OpenRouter => openrouter::request_params(),
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Groq => write!(f, "groq"),
            BackendKind::Cerebras => write!(f, "cerebras"),
            BackendKind::OpenRouter => write!(f, "openrouter"),
        }
    }
}

/// Create a backend from configuration
///
/// Returns `None` for backends that are disabled or have no API key; those
/// are not offered to the router.
pub fn create_backend(config: &BackendConfig) -> Result<Option<Arc<dyn ChatBackend>>> {
    if !config.enabled {
        info!(backend = %config.name, "Backend disabled in configuration");
        return Ok(None);
    }

    let Some(api_key) = config.get_api_key() else {
        warn!(
            backend = %config.name,
            env = config.kind.api_key_env(),
            "No API key configured, backend will not be offered to the router"
        );
        return Ok(None);
    };

    let settings = BackendSettings {
        name: config.name.clone(),
        kind: config.kind,
        api_key,
        api_base: config.get_api_base(),
        default_model: config.get_default_model(),
        models: config.routable_models(),
        timeout: Duration::from_secs(config.timeout),
        headers: config.headers.clone(),
    };

    info!(
        backend = %settings.name,
        kind = %settings.kind,
        api_base = %settings.api_base,
        default_model = %settings.default_model,
        "Backend configured"
    );

    Ok(Some(Arc::new(OpenAICompatibleBackend::new(settings)?)))
}

/// Create every usable backend, preserving configuration order
pub fn create_backends(configs: &[BackendConfig]) -> Result<Vec<Arc<dyn ChatBackend>>> {
    let mut backends = Vec::with_capacity(configs.len());
    for config in configs {
        if let Some(backend) = create_backend(config)? {
            backends.push(backend);
        }
    }
    Ok(backends)
}
