//! Legacy `/chat` endpoint
//!
//! Always routes by round robin and streams the raw text of the completion
//! without any event framing.

use crate::core::streaming::{create_sse_response, raw_text_body};
use crate::core::types::LegacyChatRequest;
use crate::server::routes::parse_messages_body;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_web::{HttpResponse, web};
use tracing::{error, info};

/// Configure legacy routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/chat", web::post().to(legacy_chat));
}

/// Unframed chat endpoint
pub async fn legacy_chat(state: web::Data<AppState>, body: web::Bytes) -> Result<HttpResponse> {
    let request: LegacyChatRequest = parse_messages_body(&body)?;

    let selection = state.router.select(None);
    info!(
        backend = %selection.backend.name(),
        reason = ?selection.reason,
        "Legacy chat request"
    );

    let increments = selection
        .backend
        .chat(&request.messages, None)
        .await
        .map_err(|e| {
            error!("Backend {} failed to start: {}", selection.backend.name(), e);
            GatewayError::from(e)
        })?;

    Ok(create_sse_response(raw_text_body(increments)))
}
