//! Utility functions for streaming

use uuid::Uuid;

/// Object type of streamed chunks
pub const CHUNK_OBJECT: &str = "chat.completion.chunk";

/// Object type of non-streaming completions
pub const COMPLETION_OBJECT: &str = "chat.completion";

/// Model reported when the request did not name one
pub const UNKNOWN_MODEL: &str = "unknown";

/// Generate a response id
pub fn generate_response_id() -> String {
    format!("chatcmpl-{}", Uuid::new_v4().simple())
}

/// Generate a system fingerprint
pub fn generate_fingerprint() -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("fp_{}", &random[..10])
}

/// Current unix time in seconds
pub fn unix_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}
