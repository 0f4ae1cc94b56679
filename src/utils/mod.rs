//! Utility modules for the gateway
//!
//! - **error**: crate error type and the HTTP error envelope
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;

pub use logging::init_logging;
