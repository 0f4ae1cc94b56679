//! Core functionality for the gateway
//!
//! This module contains the routing, backend and streaming logic along with
//! the data structures they share.

pub mod providers;
pub mod router;
pub mod streaming;
pub mod types;
