//! Groq backend
//!
//! Groq serves an OpenAI-compatible streaming chat API. Its chunks carry an
//! extra `x_groq` object (request id, usage on the last chunk) that never
//! contributes text.

mod streaming;

pub use streaming::{GroqChoice, GroqChunk, GroqDelta, XGroq};

use serde_json::{Map, Value, json};

pub const DISPLAY_NAME: &str = "Groq";
pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "moonshotai/kimi-k2-instruct-0905";
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Fixed sampling parameters sent with every request
pub fn request_params() -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("temperature".to_string(), json!(0.6));
    params.insert("max_completion_tokens".to_string(), json!(4096));
    params.insert("top_p".to_string(), json!(1));
    params.insert("stop".to_string(), Value::Null);
    params
}
