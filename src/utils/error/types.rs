//! Error types for the gateway

use crate::core::providers::BackendError;
use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request body could not be parsed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Request parsed but failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Failures reported by a backend
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No backend could be offered to the router
    #[error("No providers available: {0}")]
    NoProvidersAvailable(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
