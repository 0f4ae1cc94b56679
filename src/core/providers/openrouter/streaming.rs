//! OpenRouter stream chunk schema

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct OpenRouterChunk {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub choices: Vec<OpenRouterChoice>,
    #[serde(default)]
    pub error: Option<OpenRouterStreamError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenRouterChoice {
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub delta: OpenRouterDelta,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenRouterDelta {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Error reported inside the stream after headers were sent
#[derive(Debug, Clone, Deserialize)]
pub struct OpenRouterStreamError {
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(default)]
    pub message: String,
}

impl OpenRouterStreamError {
    pub fn describe(&self) -> String {
        match &self.code {
            Some(code) => format!("{} (code {})", self.message, code),
            None => self.message.clone(),
        }
    }
}

impl OpenRouterChunk {
    pub fn delta_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.delta.content.as_deref())
    }
}
