//! GraphHopper geocoding client
//!
//! Converts free-form address strings to geographic coordinates using the
//! GraphHopper `/geocode` endpoint. Only the best hit is requested.

use std::time::Duration;

use async_trait::async_trait;
use domain::{GeoLocation, Place};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::GraphHopperConfig;
use crate::error::{api_message, retry_after_secs};

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Address could not be resolved to coordinates
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// Rate limit exceeded
    #[error("Geocoding rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Request timeout
    #[error("Geocoding request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl GeocodingError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::Timeout { .. } | Self::RateLimitExceeded { .. }
        )
    }
}

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form address to the best matching place
    async fn geocode(&self, address: &str) -> Result<Place, GeocodingError>;
}

/// GraphHopper-based geocoding client
#[derive(Debug)]
pub struct GraphHopperGeocodingClient {
    client: Client,
    config: GraphHopperConfig,
}

impl GraphHopperGeocodingClient {
    /// Create a new GraphHopper geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &GraphHopperConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("rumbo/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Parse the raw geocode JSON into the first hit
    ///
    /// `address` is used as the place name when the hit carries none.
    fn parse_geocode_response(body: &str, address: &str) -> Result<Place, GeocodingError> {
        let raw: RawGeocodeResponse =
            serde_json::from_str(body).map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let hit = raw
            .hits
            .into_iter()
            .next()
            .ok_or_else(|| GeocodingError::AddressNotFound(address.to_string()))?;

        let location = GeoLocation::new(hit.point.lat, hit.point.lng)
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let name = hit
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| address.to_string());

        Ok(Place::new(location, name))
    }
}

#[async_trait]
impl GeocodingClient for GraphHopperGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Place, GeocodingError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(GeocodingError::AddressNotFound(
                "Address must not be empty".to_string(),
            ));
        }

        let url = format!("{}/geocode", self.config.base_url);
        let params = [
            ("key", self.config.api_key.as_str()),
            ("q", address),
            ("limit", "1"),
            ("locale", self.config.locale.as_str()),
        ];

        debug!(%url, "Geocoding address");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    GeocodingError::ConnectionFailed(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodingError::RateLimitExceeded {
                retry_after_secs: retry_after_secs(&response),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodingError::RequestFailed(
                api_message(&body).unwrap_or_else(|| format!("HTTP {status}")),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let place = Self::parse_geocode_response(&body, address)?;
        debug!(%address, name = %place.name, location = %place.location, "Geocoded address");
        Ok(place)
    }
}

/// Raw GraphHopper geocode response
#[derive(Debug, Deserialize)]
struct RawGeocodeResponse {
    #[serde(default)]
    hits: Vec<RawHit>,
}

#[derive(Debug, Deserialize)]
struct RawHit {
    point: RawPoint,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPoint {
    lat: f64,
    lng: f64,
}
