//! # Switchyard
//!
//! An OpenAI-compatible chat completion gateway in front of Groq, Cerebras
//! and OpenRouter.
//!
//! ## Features
//!
//! - **OpenAI Compatible**: `/v1/chat/completions` and `/v1/models` speak the
//!   OpenAI wire format, streamed or not
//! - **Prefix Routing**: a model-prefix table pins model families to backends
//! - **Round Robin**: requests without a matching model rotate across backends
//! - **Stream Normalization**: every backend's chunk dialect is reduced to text
//!   increments and re-emitted as canonical `chat.completion.chunk` events
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use switchyard::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/gateway.yaml").await?;
//!     let gateway = Gateway::new(config)?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Library Mode
//!
//! ```rust,no_run
//! use switchyard::core::providers::create_backends;
//! use switchyard::core::router::Router;
//! use switchyard::core::streaming::{ResponseParams, aggregate};
//! use switchyard::{ChatMessage, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let router = Router::new(create_backends(config.backends())?, config.routes())?;
//!
//!     let selection = router.select(Some("gpt-oss-120b"));
//!     let messages = vec![ChatMessage::user("What is the capital of France?")];
//!     let increments = selection.backend.chat(&messages, selection.model.as_deref()).await?;
//!
//!     let params = ResponseParams::new(Some("gpt-oss-120b"), false);
//!     let completion = aggregate(increments, params).await?;
//!     println!("{}", completion.content());
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};

// Export streaming types
pub use core::streaming::{
    ChatCompletionChunk, ChatCompletionChunkChoice, ChatCompletionDelta, StreamEvent,
};

// Export request and response types
pub use core::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, MessageRole, Model, Usage,
};

// Export core functionality
pub use core::providers::{BackendError, BackendKind, ChatBackend};
pub use core::router::{Router, Selection};

use tracing::info;

/// A gateway instance: configuration plus the server built from it
pub struct Gateway {
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    ///
    /// Fails when no configured backend has credentials.
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");

        let server = server::ServerBuilder::new().with_config(config).build()?;

        Ok(Self { server })
    }

    /// Run the gateway server
    pub async fn run(self) -> Result<()> {
        info!("Starting Switchyard gateway");
        self.server.start().await
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
