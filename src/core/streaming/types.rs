//! Type definitions for streaming responses

use crate::core::types::{FinishReason, MessageRole, Usage};
use crate::utils::error::Result;
use actix_web::web;
use serde::{Deserialize, Serialize};

/// One `data:` frame on the SSE wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub data: String,
}

impl Event {
    pub fn data<S: Into<String>>(data: S) -> Self {
        Self { data: data.into() }
    }

    pub fn to_bytes(&self) -> web::Bytes {
        web::Bytes::from(format!("data: {}\n\n", self.data))
    }
}

/// Streaming response chunk for chat completions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionChunk {
    /// Unique identifier shared by every chunk of a response
    pub id: String,
    /// Object type (always "chat.completion.chunk")
    pub object: String,
    /// Unix timestamp fixed for the whole response
    pub created: i64,
    /// Model echoed from the request
    pub model: String,
    /// System fingerprint
    pub system_fingerprint: String,
    /// Always exactly one choice
    pub choices: Vec<ChatCompletionChunkChoice>,
    /// Usage statistics (only in final chunk, only when requested)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// Choice in a streaming chat completion chunk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionChunkChoice {
    pub index: u32,
    pub delta: ChatCompletionDelta,
    /// Set only on the final chunk
    pub finish_reason: Option<FinishReason>,
    /// Always null
    pub logprobs: Option<serde_json::Value>,
}

/// Delta containing incremental content in streaming response
///
/// Absent fields are omitted, so the final delta serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionDelta {
    /// Role of the message (only in first chunk)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<MessageRole>,
    /// Incremental content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ChatCompletionChunk {
    pub fn first_choice(&self) -> Option<&ChatCompletionChunkChoice> {
        self.choices.first()
    }

    /// Whether this is the terminal chunk of a response
    pub fn is_final(&self) -> bool {
        self.first_choice()
            .is_some_and(|choice| choice.finish_reason.is_some())
    }
}

/// One item of a normalized response stream
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    Chunk(ChatCompletionChunk),
    /// End-of-stream marker
    Done,
}

impl StreamEvent {
    pub fn chunk(&self) -> Option<&ChatCompletionChunk> {
        match self {
            StreamEvent::Chunk(chunk) => Some(chunk),
            StreamEvent::Done => None,
        }
    }

    /// SSE event carrying this item
    pub fn to_event(&self) -> Result<Event> {
        match self {
            StreamEvent::Chunk(chunk) => Ok(Event::data(serde_json::to_string(chunk)?)),
            StreamEvent::Done => Ok(Event::data("[DONE]")),
        }
    }

    /// Wire form: `data: <json>\n\n` or `data: [DONE]\n\n`
    pub fn to_bytes(&self) -> Result<web::Bytes> {
        Ok(self.to_event()?.to_bytes())
    }
}
