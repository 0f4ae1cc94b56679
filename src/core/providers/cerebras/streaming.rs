//! Cerebras stream chunk schema

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CerebrasChunk {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub choices: Vec<CerebrasChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CerebrasChoice {
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub delta: CerebrasDelta,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CerebrasDelta {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub reasoning: Option<String>,
}

impl CerebrasChunk {
    pub fn delta_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.delta.content.as_deref())
    }
}
