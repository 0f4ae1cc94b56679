//! OpenRouter backend
//!
//! OpenRouter keeps slow streams alive with SSE comment lines and reports
//! failures that happen after the response started as an in-band `error`
//! object inside a data payload.

mod streaming;

pub use streaming::{OpenRouterChoice, OpenRouterChunk, OpenRouterDelta, OpenRouterStreamError};

use serde_json::{Map, Value};

pub const DISPLAY_NAME: &str = "OpenRouter";
pub const DEFAULT_API_BASE: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "xiaomi/mimo-v2-flash:free";
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// OpenRouter is called with its own defaults
pub fn request_params() -> Map<String, Value> {
    Map::new()
}
