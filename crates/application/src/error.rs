//! Application-level errors

use std::fmt;

use thiserror::Error;

/// Which address prompt an input belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    /// Starting address
    Origin,
    /// Target address
    Destination,
}

impl AddressField {
    /// Spanish noun used in user-facing messages
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Origin => "origen",
            Self::Destination => "destino",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Origin => f.write_str("origin"),
            Self::Destination => f.write_str("destination"),
        }
    }
}

/// Outcomes of a directions attempt other than success
///
/// Every variant is recoverable: the caller reports it and abandons only
/// the current attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionsError {
    /// Blank address entered
    #[error("Empty {field} address")]
    EmptyInput {
        /// Which prompt was left blank
        field: AddressField,
    },

    /// Geocoder returned no hits
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// Router returned no paths
    #[error("No route available")]
    NoRouteAvailable,

    /// The service answered but rejected the request
    #[error("Service error: {0}")]
    Api(String),

    /// Network or HTTP failure
    #[error("Transport error: {0}")]
    Transport(String),
}

impl DirectionsError {
    /// Check if retrying the same request could succeed
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
