//! GraphHopper adapter - Implements GeocodingPort and RoutingPort using integration_graphhopper

use application::{DirectionsError, GeocodingPort, RoutingPort};
use async_trait::async_trait;
use domain::{Place, Route, RouteRequest};
use integration_graphhopper::{
    GeocodingClient, GeocodingError, GraphHopperConfig, GraphHopperGeocodingClient,
    GraphHopperRoutingClient, RoutingClient, RoutingError,
};
use tracing::{debug, instrument, warn};

/// Adapter for address lookup and routing over the GraphHopper API
pub struct GraphHopperAdapter {
    geocoding_client: GraphHopperGeocodingClient,
    routing_client: GraphHopperRoutingClient,
}

impl std::fmt::Debug for GraphHopperAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphHopperAdapter")
            .field("geocoding_client", &"GraphHopperGeocodingClient")
            .field("routing_client", &"GraphHopperRoutingClient")
            .finish()
    }
}

impl GraphHopperAdapter {
    /// Create a new adapter from already constructed clients
    pub const fn new(
        geocoding_client: GraphHopperGeocodingClient,
        routing_client: GraphHopperRoutingClient,
    ) -> Self {
        Self {
            geocoding_client,
            routing_client,
        }
    }

    /// Create both clients from a shared configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP clients fail to initialize.
    pub fn from_config(config: &GraphHopperConfig) -> Result<Self, DirectionsError> {
        let geocoding_client =
            GraphHopperGeocodingClient::new(config).map_err(Self::map_geocoding_error)?;
        let routing_client =
            GraphHopperRoutingClient::new(config).map_err(Self::map_routing_error)?;

        debug!(base_url = %config.base_url, "GraphHopper adapter ready");
        Ok(Self::new(geocoding_client, routing_client))
    }

    /// Map an integration geocoding error onto the application taxonomy
    fn map_geocoding_error(error: GeocodingError) -> DirectionsError {
        match error {
            GeocodingError::AddressNotFound(address) => DirectionsError::AddressNotFound(address),
            GeocodingError::RequestFailed(message) => DirectionsError::Api(message),
            other @ (GeocodingError::ConnectionFailed(_)
            | GeocodingError::ParseError(_)
            | GeocodingError::RateLimitExceeded { .. }
            | GeocodingError::Timeout { .. }) => DirectionsError::Transport(other.to_string()),
        }
    }

    /// Map an integration routing error onto the application taxonomy
    fn map_routing_error(error: RoutingError) -> DirectionsError {
        match error {
            RoutingError::NoRouteAvailable => DirectionsError::NoRouteAvailable,
            RoutingError::ApiError(message) => DirectionsError::Api(message),
            other @ (RoutingError::ConnectionFailed(_)
            | RoutingError::ParseError(_)
            | RoutingError::RateLimitExceeded { .. }
            | RoutingError::Timeout { .. }) => DirectionsError::Transport(other.to_string()),
        }
    }
}

#[async_trait]
impl GeocodingPort for GraphHopperAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Place, DirectionsError> {
        self.geocoding_client.geocode(address).await.map_err(|e| {
            warn!(error = %e, "GraphHopper geocoding failed");
            Self::map_geocoding_error(e)
        })
    }
}

#[async_trait]
impl RoutingPort for GraphHopperAdapter {
    #[instrument(skip(self))]
    async fn route(&self, request: &RouteRequest) -> Result<Route, DirectionsError> {
        self.routing_client.route(request).await.map_err(|e| {
            warn!(error = %e, "GraphHopper routing failed");
            Self::map_routing_error(e)
        })
    }
}
