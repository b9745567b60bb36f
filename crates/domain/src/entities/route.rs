//! Route request and computed route

use serde::{Deserialize, Serialize};

use crate::value_objects::{GeoLocation, TravelMode};

/// Parameters of a single route computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Starting point
    pub origin: GeoLocation,
    /// End point
    pub destination: GeoLocation,
    /// Vehicle profile
    pub mode: TravelMode,
}

impl RouteRequest {
    /// Create a new route request
    #[must_use]
    pub const fn new(origin: GeoLocation, destination: GeoLocation, mode: TravelMode) -> Self {
        Self {
            origin,
            destination,
            mode,
        }
    }
}

/// One turn-by-turn step of a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// Instruction text as returned by the routing service
    pub text: String,
    /// Distance covered by this step in meters
    pub distance_meters: f64,
    /// Time spent on this step in milliseconds
    pub duration_millis: f64,
}

impl Instruction {
    /// Create a new instruction
    #[must_use]
    pub fn new(text: impl Into<String>, distance_meters: f64, duration_millis: f64) -> Self {
        Self {
            text: text.into(),
            distance_meters,
            duration_millis,
        }
    }

    /// Whether the step covers no distance (e.g. the arrival step)
    #[must_use]
    pub fn is_stationary(&self) -> bool {
        self.distance_meters <= 0.0
    }

    /// Step duration in seconds
    #[must_use]
    pub fn duration_seconds(&self) -> f64 {
        self.duration_millis / 1000.0
    }
}

/// A computed route: totals plus ordered instructions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Total distance in meters
    pub distance_meters: f64,
    /// Total duration in milliseconds
    pub duration_millis: f64,
    /// Instructions in route order
    pub instructions: Vec<Instruction>,
}

impl Route {
    /// Total distance in kilometers
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }

    /// Total duration in minutes
    #[must_use]
    pub fn duration_minutes(&self) -> f64 {
        self.duration_millis / 60_000.0
    }

    /// Total duration in hours
    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        self.duration_minutes() / 60.0
    }
}
