//! Groq stream chunk schema

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct GroqChunk {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<GroqChoice>,
    #[serde(default)]
    pub x_groq: Option<XGroq>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroqChoice {
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub delta: GroqDelta,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroqDelta {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Groq-specific metadata attached to some chunks
#[derive(Debug, Clone, Deserialize)]
pub struct XGroq {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub usage: Option<Value>,
}

impl GroqChunk {
    /// Text carried by the first choice, if any
    pub fn delta_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.delta.content.as_deref())
    }
}
