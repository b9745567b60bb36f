//! GraphHopper integration for rumbo
//!
//! Provides address geocoding and point-to-point routing via the
//! [GraphHopper Directions API](https://graphhopper.com/api/1).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern. [`GeocodingClient`] turns a
//! free-text address into a [`domain::Place`] and is implemented by
//! [`GraphHopperGeocodingClient`]. [`RoutingClient`] computes a
//! [`domain::Route`] between two coordinates and is implemented by
//! [`GraphHopperRoutingClient`]. Both share one [`GraphHopperConfig`].
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::{RouteRequest, TravelMode};
//! use integration_graphhopper::{
//!     GeocodingClient, GraphHopperConfig, GraphHopperGeocodingClient,
//!     GraphHopperRoutingClient, RoutingClient,
//! };
//!
//! let config = GraphHopperConfig::with_api_key("my-key");
//! let geocoder = GraphHopperGeocodingClient::new(&config)?;
//! let router = GraphHopperRoutingClient::new(&config)?;
//!
//! let from = geocoder.geocode("Puerta del Sol, Madrid").await?;
//! let to = geocoder.geocode("Plaza Mayor, Salamanca").await?;
//! let route = router
//!     .route(&RouteRequest::new(from.location, to.location, TravelMode::Car))
//!     .await?;
//! ```

mod client;
mod config;
mod error;
mod geocoding;

pub use client::{GraphHopperRoutingClient, RoutingClient};
pub use config::GraphHopperConfig;
pub use error::RoutingError;
pub use geocoding::{GeocodingClient, GeocodingError, GraphHopperGeocodingClient};
