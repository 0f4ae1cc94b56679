//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

#![allow(missing_docs)]

pub mod backend;
pub mod gateway;
pub mod logging;
pub mod router;
pub mod server;

// Re-export all configuration types
pub use backend::*;
pub use gateway::*;
pub use logging::*;
pub use router::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3000
}

/// Default backend timeout in seconds
pub fn default_timeout() -> u64 {
    60
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    10 * 1024 * 1024 // 10MB
}

pub fn default_true() -> bool {
    true
}
