//! Core type definition module
//!
//! Contains the request, response and message types shared by the router,
//! the streaming pipeline and the HTTP handlers.

pub mod message;
pub mod requests;
pub mod responses;

// Re-export all public types
pub use message::*;
pub use requests::*;
pub use responses::*;
