//! Error handling for the gateway
//!
//! This module defines the crate-wide error type, its helper constructors and
//! the OpenAI-style error envelope returned over HTTP.

mod helpers;
mod response;
mod types;

pub use response::{ErrorBody, ErrorDetail, ErrorKind};
pub use types::{GatewayError, Result};
