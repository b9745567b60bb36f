//! GraphHopper routing client
//!
//! Computes point-to-point routes with turn-by-turn instructions using the
//! GraphHopper `/route` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use domain::{Instruction, Route, RouteRequest};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::GraphHopperConfig;
use crate::error::{RoutingError, api_message, retry_after_secs};

/// Trait for routing service clients
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Compute a route between the request's origin and destination
    async fn route(&self, request: &RouteRequest) -> Result<Route, RoutingError>;
}

/// GraphHopper-based routing client
#[derive(Debug)]
pub struct GraphHopperRoutingClient {
    client: Client,
    config: GraphHopperConfig,
}

impl GraphHopperRoutingClient {
    /// Create a new GraphHopper routing client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &GraphHopperConfig) -> Result<Self, RoutingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("rumbo/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RoutingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Build the query parameters for a route request
    ///
    /// The two `point` entries come first, origin before destination.
    fn route_params(&self, request: &RouteRequest) -> Vec<(&'static str, String)> {
        vec![
            ("point", request.origin.to_point_param()),
            ("point", request.destination.to_point_param()),
            ("key", self.config.api_key.clone()),
            ("vehicle", request.mode.as_str().to_string()),
            ("locale", self.config.locale.clone()),
            ("instructions", "true".to_string()),
            ("calc_points", "true".to_string()),
            ("points_encoded", "false".to_string()),
        ]
    }

    /// Parse the raw route JSON, keeping only the first path
    fn parse_route_response(body: &str) -> Result<Route, RoutingError> {
        let raw: RawRouteResponse =
            serde_json::from_str(body).map_err(|e| RoutingError::ParseError(e.to_string()))?;

        let path = raw
            .paths
            .into_iter()
            .next()
            .ok_or(RoutingError::NoRouteAvailable)?;

        Ok(Self::convert_path(path))
    }

    /// Convert a raw path to a typed route
    fn convert_path(raw: RawPath) -> Route {
        let instructions = raw
            .instructions
            .into_iter()
            .map(|i| Instruction::new(i.text, i.distance, i.time))
            .collect();

        Route {
            distance_meters: raw.distance,
            duration_millis: raw.time,
            instructions,
        }
    }
}

#[async_trait]
impl RoutingClient for GraphHopperRoutingClient {
    #[instrument(skip(self), fields(from = %request.origin, to = %request.destination, mode = %request.mode))]
    async fn route(&self, request: &RouteRequest) -> Result<Route, RoutingError> {
        let url = format!("{}/route", self.config.base_url);

        debug!(%url, "Requesting route");

        let response = self
            .client
            .get(&url)
            .query(&self.route_params(request))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RoutingError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    RoutingError::ConnectionFailed(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(RoutingError::RateLimitExceeded {
                retry_after_secs: retry_after_secs(&response),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = api_message(&body).unwrap_or_else(|| format!("HTTP {status}"));
            warn!(%status, %message, "Routing request rejected");
            return Err(RoutingError::ApiError(message));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RoutingError::ParseError(e.to_string()))?;

        let route = Self::parse_route_response(&body)?;

        debug!(
            distance_m = route.distance_meters,
            time_ms = route.duration_millis,
            steps = route.instructions.len(),
            "Route computed"
        );
        Ok(route)
    }
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawRouteResponse {
    #[serde(default)]
    paths: Vec<RawPath>,
}

#[derive(Debug, Deserialize)]
struct RawPath {
    distance: f64,
    time: f64,
    #[serde(default)]
    instructions: Vec<RawInstruction>,
}

#[derive(Debug, Deserialize)]
struct RawInstruction {
    #[serde(default)]
    text: String,
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    time: f64,
}

#[cfg(test)]
mod tests {
    use domain::{GeoLocation, TravelMode};

    use super::*;

    fn sample_request(mode: TravelMode) -> RouteRequest {
        RouteRequest::new(
            GeoLocation::new(40.4168, -3.7038).unwrap(),
            GeoLocation::new(41.3874, 2.1686).unwrap(),
            mode,
        )
    }

    #[test]
    fn test_route_params_order_and_flags() {
        let client = GraphHopperRoutingClient::new(&GraphHopperConfig::for_testing()).unwrap();
        let params = client.route_params(&sample_request(TravelMode::Car));

        assert_eq!(params[0], ("point", "40.4168,-3.7038".to_string()));
        assert_eq!(params[1], ("point", "41.3874,2.1686".to_string()));
        assert!(params.contains(&("key", "test-key".to_string())));
        assert!(params.contains(&("locale", "es".to_string())));
        assert!(params.contains(&("instructions", "true".to_string())));
        assert!(params.contains(&("calc_points", "true".to_string())));
        assert!(params.contains(&("points_encoded", "false".to_string())));
    }

    #[test]
    fn test_route_params_vehicle_from_mode() {
        let client = GraphHopperRoutingClient::new(&GraphHopperConfig::for_testing()).unwrap();
        let params = client.route_params(&sample_request(TravelMode::from_menu_choice("2")));
        assert!(params.contains(&("vehicle", "bike".to_string())));
    }

    #[test]
    fn test_parse_route_response() {
        let json = r#"{
            "hints": {"visited_nodes.sum": 58},
            "paths": [{
                "distance": 1500.0,
                "time": 90000,
                "points": {"type": "LineString", "coordinates": [[-3.7, 40.4], [-3.69, 40.41]]},
                "instructions": [
                    {"text": "Continue onto Calle Mayor", "distance": 1500.0, "time": 90000, "sign": 0},
                    {"text": "Arrive at destination", "distance": 0.0, "time": 0, "sign": 4}
                ]
            }]
        }"#;

        let route = GraphHopperRoutingClient::parse_route_response(json).unwrap();
        assert!((route.distance_meters - 1500.0).abs() < f64::EPSILON);
        assert!((route.duration_millis - 90_000.0).abs() < f64::EPSILON);
        assert_eq!(route.instructions.len(), 2);
        assert_eq!(route.instructions[0].text, "Continue onto Calle Mayor");
        assert!(route.instructions[1].is_stationary());
    }

    #[test]
    fn test_parse_uses_first_path_only() {
        let json = r#"{"paths": [
            {"distance": 10.0, "time": 1000, "instructions": []},
            {"distance": 20.0, "time": 2000, "instructions": []}
        ]}"#;
        let route = GraphHopperRoutingClient::parse_route_response(json).unwrap();
        assert!((route.distance_meters - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_missing_instruction_fields_default() {
        let json = r#"{"paths": [{"distance": 5.0, "time": 100, "instructions": [{}]}]}"#;
        let route = GraphHopperRoutingClient::parse_route_response(json).unwrap();
        let step = &route.instructions[0];
        assert!(step.text.is_empty());
        assert!(step.distance_meters.abs() < f64::EPSILON);
        assert!(step.duration_millis.abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_missing_instructions_array() {
        let json = r#"{"paths": [{"distance": 5.0, "time": 100}]}"#;
        let route = GraphHopperRoutingClient::parse_route_response(json).unwrap();
        assert!(route.instructions.is_empty());
    }

    #[test]
    fn test_parse_empty_paths() {
        let err = GraphHopperRoutingClient::parse_route_response(r#"{"paths": []}"#).unwrap_err();
        assert!(matches!(err, RoutingError::NoRouteAvailable));

        let err = GraphHopperRoutingClient::parse_route_response("{}").unwrap_err();
        assert!(matches!(err, RoutingError::NoRouteAvailable));
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = GraphHopperRoutingClient::parse_route_response("not json");
        assert!(matches!(result, Err(RoutingError::ParseError(_))));
    }
}
