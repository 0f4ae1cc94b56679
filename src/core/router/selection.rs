//! Backend selection primitives

use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// Round-robin cursor over a fixed number of backends
///
/// The cursor is always in `0..len` and advances with a single atomic
/// read-modify-write, so concurrent fallback decisions each observe a distinct
/// position and the rotation stays exact.
#[derive(Debug)]
pub struct RoundRobinCursor {
    position: AtomicUsize,
    len: usize,
}

impl RoundRobinCursor {
    /// `len` must be non-zero
    pub fn new(len: usize) -> Self {
        Self {
            position: AtomicUsize::new(0),
            len,
        }
    }

    /// Return the current position and advance to the next one
    pub fn advance(&self) -> usize {
        let len = self.len;
        let index = self
            .position
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                Some((current + 1) % len)
            })
            .unwrap_or_else(|current| current);
        debug!("Round-robin selected backend at index {}", index);
        index
    }

    /// Position the next fallback decision will use
    pub fn position(&self) -> usize {
        self.position.load(Ordering::Acquire)
    }
}

/// Prefix entry resolved against the backend list
#[derive(Debug, Clone)]
pub struct Route {
    pub prefix: String,
    pub backend: usize,
}

/// Ordered model-prefix routing table
///
/// The first entry whose prefix the requested model starts with wins, even if
/// a later entry has a longer matching prefix.
#[derive(Debug, Clone, Default)]
pub struct RoutingTable {
    routes: Vec<Route>,
}

impl RoutingTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn lookup(&self, model: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|route| model.starts_with(route.prefix.as_str()))
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
