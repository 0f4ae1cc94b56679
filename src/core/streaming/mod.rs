//! Streaming response handling
//!
//! This module turns backend increments into OpenAI-compatible output:
//! Server-Sent Events for streaming callers and a single aggregated
//! completion for everyone else.

use crate::utils::error::{GatewayError, Result};
use actix_web::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use actix_web::{HttpResponse, web};
use futures::stream::{Stream, StreamExt, TryStreamExt};
use tracing::error;

// Module declarations
mod aggregator;
mod normalizer;
mod types;
pub mod utils;


pub use aggregator::aggregate;
pub use normalizer::{ResponseParams, StreamNormalizer, normalize};
pub use types::{
    ChatCompletionChunk, ChatCompletionChunkChoice, ChatCompletionDelta, Event, StreamEvent,
};

/// Create a Server-Sent Events response for Actix-web
pub fn create_sse_response<S>(stream: S) -> HttpResponse
where
    S: Stream<Item = Result<web::Bytes>> + 'static,
{
    HttpResponse::Ok()
        .insert_header((CONTENT_TYPE, "text/event-stream"))
        .insert_header((CACHE_CONTROL, "no-cache"))
        .insert_header(("Connection", "keep-alive"))
        .streaming(stream)
}

/// Frame normalized events for the wire
///
/// Errors are logged and passed on, which aborts the HTTP body without an
/// end marker.
pub fn sse_body<S, E>(events: S) -> impl Stream<Item = Result<web::Bytes>>
where
    S: Stream<Item = std::result::Result<StreamEvent, E>>,
    E: Into<GatewayError>,
{
    events
        .map(|event| event.map_err(Into::into).and_then(|event| event.to_bytes()))
        .inspect_err(|e| error!("Stream terminated with error: {}", e))
}

/// Raw increments as an unframed body
pub fn raw_text_body<S, E>(increments: S) -> impl Stream<Item = Result<web::Bytes>>
where
    S: Stream<Item = std::result::Result<String, E>>,
    E: Into<GatewayError>,
{
    increments
        .map(|increment| increment.map(web::Bytes::from).map_err(Into::into))
        .inspect_err(|e| error!("Stream terminated with error: {}", e))
}
