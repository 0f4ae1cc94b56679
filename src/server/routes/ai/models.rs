//! Model listing endpoint

use crate::core::types::ModelListResponse;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use tracing::debug;

/// List available models
///
/// Returns the routable models of every backend offered to the router.
pub async fn list_models(state: web::Data<AppState>) -> HttpResponse {
    debug!("Listing {} models", state.catalog.len());
    HttpResponse::Ok().json(ModelListResponse::new(state.catalog.as_ref().clone()))
}
