//! Tagged backend chunks
//!
//! Every backend streams its own chunk schema. A decoded payload is kept as
//! one variant per backend and reduced to a plain text increment here, so no
//! other layer ever inspects backend chunks.

use crate::core::providers::BackendKind;
use crate::core::providers::cerebras::CerebrasChunk;
use crate::core::providers::error::BackendError;
use crate::core::providers::groq::GroqChunk;
use crate::core::providers::openrouter::OpenRouterChunk;

#[derive(Debug, Clone)]
pub enum BackendChunk {
    Groq(GroqChunk),
    Cerebras(CerebrasChunk),
    OpenRouter(OpenRouterChunk),
}

impl BackendChunk {
    /// Decode one SSE data payload with the schema of `kind`
    pub fn decode(kind: BackendKind, backend: &str, payload: &str) -> Result<Self, BackendError> {
        let decoded = match kind {
            BackendKind::Groq => serde_json::from_str(payload).map(BackendChunk::Groq),
            BackendKind::Cerebras => serde_json::from_str(payload).map(BackendChunk::Cerebras),
            BackendKind::OpenRouter => serde_json::from_str(payload).map(BackendChunk::OpenRouter),
        };
        decoded.map_err(|e| BackendError::decode(backend, format!("{}: {}", e, payload)))
    }

    /// Text increment carried by the chunk
    ///
    /// Chunks without a textual delta (role-only, reasoning, metadata) yield an
    /// empty increment.
    pub fn into_increment(self, backend: &str) -> Result<String, BackendError> {
        match self {
            BackendChunk::Groq(chunk) => Ok(chunk.delta_content().unwrap_or_default().to_string()),
            BackendChunk::Cerebras(chunk) => {
                Ok(chunk.delta_content().unwrap_or_default().to_string())
            }
            BackendChunk::OpenRouter(chunk) => match &chunk.error {
                Some(error) => Err(BackendError::stream(backend, error.describe())),
                None => Ok(chunk.delta_content().unwrap_or_default().to_string()),
            },
        }
    }
}
