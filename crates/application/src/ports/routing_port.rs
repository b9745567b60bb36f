//! Routing port
//!
//! Computes a [`Route`] for a [`RouteRequest`]. Adapters in the
//! infrastructure layer implement this port using a routing API.

use async_trait::async_trait;
use domain::{Route, RouteRequest};
#[cfg(test)]
use mockall::automock;

use crate::error::DirectionsError;

/// Port for point-to-point routing
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Compute a route
    ///
    /// Returns `DirectionsError::NoRouteAvailable` when the service found no
    /// path, distinct from `DirectionsError::Transport`.
    async fn route(&self, request: &RouteRequest) -> Result<Route, DirectionsError>;
}
