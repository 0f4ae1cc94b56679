//! Cerebras backend
//!
//! OpenAI-compatible streaming API. Reasoning models stream their chain of
//! thought in `delta.reasoning`, which is not part of the answer text.

mod streaming;

pub use streaming::{CerebrasChoice, CerebrasChunk, CerebrasDelta};

use serde_json::{Map, Value, json};

pub const DISPLAY_NAME: &str = "Cerebras";
pub const DEFAULT_API_BASE: &str = "https://api.cerebras.ai/v1";
pub const DEFAULT_MODEL: &str = "gpt-oss-120b";
pub const API_KEY_ENV: &str = "CEREBRAS_API_KEY";

/// Fixed sampling parameters sent with every request
pub fn request_params() -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("temperature".to_string(), json!(1));
    params.insert("max_completion_tokens".to_string(), json!(32768));
    params.insert("top_p".to_string(), json!(1));
    params.insert("reasoning_effort".to_string(), json!("medium"));
    params
}
