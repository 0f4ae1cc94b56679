//! HTTP route handlers
//!
//! Handlers that live outside the `/v1` scope.

use crate::server::state::AppState;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};
use serde_json::json;

/// Health check endpoint handler
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let backends: Vec<&str> = state
        .router
        .backends()
        .iter()
        .map(|backend| backend.name())
        .collect();

    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "backends": backends,
    }))
}

/// Fallback for unknown routes
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type(ContentType::plaintext())
        .body("Not found")
}
