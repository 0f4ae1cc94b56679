//! Chat completions endpoint

use crate::core::streaming::{ResponseParams, aggregate, create_sse_response, normalize, sse_body};
use crate::core::types::ChatCompletionRequest;
use crate::server::routes::parse_messages_body;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_web::{HttpResponse, web};
use tracing::{error, info};

/// Chat completions endpoint
///
/// OpenAI-compatible chat completions API. Streams Server-Sent Events unless
/// the request sets `stream: false`, in which case the whole completion is
/// returned as one JSON object.
pub async fn chat_completions(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let request: ChatCompletionRequest = parse_messages_body(&body)?;

    let selection = state.router.select(request.requested_model());
    info!(
        backend = %selection.backend.name(),
        model = selection.model.as_deref().unwrap_or("default"),
        reason = ?selection.reason,
        stream = request.is_streaming(),
        "Chat completion request"
    );

    let increments = selection
        .backend
        .chat(&request.messages, selection.model.as_deref())
        .await
        .map_err(|e| {
            error!("Backend {} failed to start: {}", selection.backend.name(), e);
            GatewayError::from(e)
        })?;

    let params = ResponseParams::new(request.requested_model(), request.include_usage());

    if request.is_streaming() {
        return Ok(create_sse_response(sse_body(normalize(increments, params))));
    }

    let completion = aggregate(increments, params).await.map_err(|e| {
        error!("Backend {} failed mid-stream: {}", selection.backend.name(), e);
        GatewayError::from(e)
    })?;

    Ok(HttpResponse::Ok().json(completion))
}
