//! Backend error handling
//!
//! Every failure a backend can report while opening or consuming a stream.
//! Each variant carries the name of the backend that produced it.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("Authentication failed for {backend}: {message}")]
    Authentication { backend: String, message: String },

    #[error("Rate limit exceeded for {backend}: {message}")]
    RateLimit { backend: String, message: String },

    #[error("{backend} API error ({status}): {message}")]
    Api {
        backend: String,
        status: u16,
        message: String,
    },

    #[error("Stream error from {backend}: {message}")]
    Stream { backend: String, message: String },

    #[error("Failed to decode {backend} chunk: {message}")]
    Decode { backend: String, message: String },

    #[error("Network error for {backend}: {message}")]
    Network { backend: String, message: String },

    #[error("Request to {backend} timed out")]
    Timeout { backend: String },
}

impl BackendError {
    pub fn authentication(backend: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Authentication {
            backend: backend.into(),
            message: message.into(),
        }
    }

    pub fn rate_limit(backend: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RateLimit {
            backend: backend.into(),
            message: message.into(),
        }
    }

    pub fn api(backend: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            backend: backend.into(),
            status,
            message: message.into(),
        }
    }

    pub fn stream(backend: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Stream {
            backend: backend.into(),
            message: message.into(),
        }
    }

    pub fn decode(backend: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            backend: backend.into(),
            message: message.into(),
        }
    }

    pub fn network(backend: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            backend: backend.into(),
            message: message.into(),
        }
    }

    pub fn timeout(backend: impl Into<String>) -> Self {
        Self::Timeout {
            backend: backend.into(),
        }
    }

    /// Map a non-success HTTP status returned before streaming started
    pub fn from_status(backend: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        let backend = backend.into();
        let body = body.into();
        match status {
            401 | 403 => Self::authentication(backend, body),
            429 => Self::rate_limit(backend, body),
            408 | 504 => Self::timeout(backend),
            _ => Self::api(backend, status, body),
        }
    }

    /// Map a transport failure reported by the HTTP client
    pub fn from_reqwest(backend: impl Into<String>, err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::timeout(backend)
        } else {
            Self::network(backend, err.to_string())
        }
    }

    /// Name of the backend that produced the error
    pub fn backend(&self) -> &str {
        match self {
            Self::Authentication { backend, .. }
            | Self::RateLimit { backend, .. }
            | Self::Api { backend, .. }
            | Self::Stream { backend, .. }
            | Self::Decode { backend, .. }
            | Self::Network { backend, .. }
            | Self::Timeout { backend } => backend,
        }
    }
}
