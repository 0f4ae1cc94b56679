//! Module
//!
//! Contains base components shared by all backends

pub mod chunk;
pub mod openai_compatible;
pub mod sse;

pub use chunk::BackendChunk;
pub use openai_compatible::{BackendSettings, OpenAICompatibleBackend};
pub use sse::{DONE_MARKER, SseFrame, SseParser, SseStream};
