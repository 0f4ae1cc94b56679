//! Router core structure

use super::selection::{RoundRobinCursor, Route, RoutingTable};
use crate::config::RouteConfig;
use crate::core::providers::ChatBackend;
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// How a backend was chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionReason {
    /// The requested model matched this routing prefix
    Prefix(String),
    /// No prefix matched; the round-robin cursor was at this index
    RoundRobin(usize),
}

/// Outcome of a routing decision
#[derive(Clone)]
pub struct Selection {
    pub backend: Arc<dyn ChatBackend>,
    /// Requested model, forwarded unchanged on a prefix match
    pub model: Option<String>,
    pub reason: SelectionReason,
}

impl std::fmt::Debug for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selection")
            .field("backend", &self.backend.name())
            .field("model", &self.model)
            .field("reason", &self.reason)
            .finish()
    }
}

/// Maps requests to backends
///
/// The backend list is fixed at construction and its order defines the
/// round-robin sequence. Changing the backend set means building a new
/// router.
pub struct Router {
    backends: Vec<Arc<dyn ChatBackend>>,
    table: RoutingTable,
    cursor: RoundRobinCursor,
}

impl Router {
    /// Create a router over `backends`
    ///
    /// Route entries naming a backend that is not in `backends` are dropped.
    pub fn new(backends: Vec<Arc<dyn ChatBackend>>, routes: &[RouteConfig]) -> Result<Self> {
        if backends.is_empty() {
            return Err(GatewayError::NoProvidersAvailable(
                "at least one backend with credentials is required".to_string(),
            ));
        }

        let mut resolved = Vec::with_capacity(routes.len());
        for route in routes {
            match backends
                .iter()
                .position(|backend| backend.name() == route.backend)
            {
                Some(index) => resolved.push(Route {
                    prefix: route.prefix.clone(),
                    backend: index,
                }),
                None => warn!(
                    prefix = %route.prefix,
                    backend = %route.backend,
                    "Dropping route to unavailable backend"
                ),
            }
        }

        info!(
            "Router initialized with {} backends and {} routes",
            backends.len(),
            resolved.len()
        );

        Ok(Self {
            cursor: RoundRobinCursor::new(backends.len()),
            table: RoutingTable::new(resolved),
            backends,
        })
    }

    /// Select a backend for `requested_model`
    ///
    /// A prefix match never moves the round-robin cursor. Without a model, or
    /// when no prefix matches, the backend under the cursor is chosen and the
    /// cursor advances.
    pub fn select(&self, requested_model: Option<&str>) -> Selection {
        if let Some(model) = requested_model {
            if let Some(route) = self.table.lookup(model) {
                let backend = Arc::clone(&self.backends[route.backend]);
                debug!(
                    model = %model,
                    prefix = %route.prefix,
                    backend = %backend.name(),
                    "Routed by model prefix"
                );
                return Selection {
                    backend,
                    model: Some(model.to_string()),
                    reason: SelectionReason::Prefix(route.prefix.clone()),
                };
            }
        }

        let index = self.cursor.advance();
        Selection {
            backend: Arc::clone(&self.backends[index]),
            model: None,
            reason: SelectionReason::RoundRobin(index),
        }
    }

    pub fn backends(&self) -> &[Arc<dyn ChatBackend>] {
        &self.backends
    }

    pub fn routes(&self) -> &[Route] {
        self.table.routes()
    }

    /// Index of the backend the next fallback decision will pick
    pub fn cursor(&self) -> usize {
        self.cursor.position()
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.backends.iter().map(|b| b.name()).collect();
        f.debug_struct("Router")
            .field("backends", &names)
            .field("table", &self.table)
            .field("cursor", &self.cursor)
            .finish()
    }
}
