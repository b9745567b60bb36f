//! Directions service
//!
//! Orchestrates one directions attempt: resolve the origin, resolve the
//! destination, then request a route. Calls are issued strictly one after
//! another; nothing runs concurrently.

use std::{fmt, sync::Arc};

use domain::{Place, Route, RouteRequest};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::{AddressField, DirectionsError},
    ports::{GeocodingPort, RoutingPort},
};

/// Directions service for geocoding addresses and computing routes
pub struct DirectionsService {
    geocoding_port: Arc<dyn GeocodingPort>,
    routing_port: Arc<dyn RoutingPort>,
}

impl fmt::Debug for DirectionsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectionsService").finish_non_exhaustive()
    }
}

impl DirectionsService {
    /// Create a new directions service
    pub fn new(geocoding_port: Arc<dyn GeocodingPort>, routing_port: Arc<dyn RoutingPort>) -> Self {
        Self {
            geocoding_port,
            routing_port,
        }
    }

    /// Resolve the address typed for `field`
    ///
    /// Blank input is rejected with `EmptyInput` before any request is made.
    #[instrument(skip(self))]
    pub async fn locate(&self, field: AddressField, address: &str) -> Result<Place, DirectionsError> {
        let address = address.trim();
        if address.is_empty() {
            debug!(%field, "Rejecting empty address");
            return Err(DirectionsError::EmptyInput { field });
        }

        info!(%field, "Geocoding address");
        let result = self.geocoding_port.geocode(address).await;
        if let Err(ref e) = result {
            warn!(%field, error = %e, "Geocoding failed");
        }
        result
    }

    /// Compute the route described by `request`
    #[instrument(skip(self))]
    pub async fn plan(&self, request: &RouteRequest) -> Result<Route, DirectionsError> {
        info!(mode = %request.mode, "Computing route");
        let result = self.routing_port.route(request).await;
        match &result {
            Ok(route) => debug!(steps = route.instructions.len(), "Route ready"),
            Err(e) => warn!(error = %e, "Routing failed"),
        }
        result
    }
}
