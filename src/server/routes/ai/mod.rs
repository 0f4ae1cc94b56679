//! AI API endpoints (OpenAI compatible)

mod chat;
mod models;

pub use chat::chat_completions;
pub use models::list_models;

use actix_web::web;

/// Configure AI API routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1")
            // Chat completions
            .route("/chat/completions", web::post().to(chat_completions))
            // Models
            .route("/models", web::get().to(list_models)),
    );
}
