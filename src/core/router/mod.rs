//! Request routing across backends
//!
//! - `router` - Router struct and the select operation
//! - `selection` - round-robin cursor and the prefix routing table

#[allow(clippy::module_inception)]
pub mod router;
pub mod selection;


pub use router::{Router, Selection, SelectionReason};
pub use selection::{RoundRobinCursor, Route, RoutingTable};
