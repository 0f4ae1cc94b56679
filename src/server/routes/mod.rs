//! HTTP route modules
//!
//! - **ai**: OpenAI-compatible endpoints under `/v1`
//! - **legacy**: the unframed `/chat` endpoint

pub mod ai;
pub mod legacy;

use crate::utils::error::{GatewayError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Decode a request body that must carry a `messages` array
///
/// Distinguishes malformed JSON, a missing or non-array `messages`, and a
/// body that does not fit `T`; all three are client errors.
pub(crate) fn parse_messages_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        warn!("Rejected request body: {}", e);
        GatewayError::invalid_request("Invalid JSON in request body")
    })?;

    if !value.get("messages").is_some_and(Value::is_array) {
        warn!("Rejected request without a messages array");
        return Err(GatewayError::validation(
            "messages is required and must be an array",
        ));
    }

    serde_json::from_value(value).map_err(|e| {
        warn!("Rejected request body: {}", e);
        GatewayError::invalid_request(format!("Invalid request: {}", e))
    })
}
