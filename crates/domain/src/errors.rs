//! Domain-level errors

use thiserror::Error;

use crate::value_objects::InvalidCoordinates;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates outside the valid latitude/longitude range
    #[error(transparent)]
    InvalidCoordinates(#[from] InvalidCoordinates),

    /// Travel mode not supported by the routing service
    #[error("Unknown travel mode: {0}")]
    UnknownTravelMode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_travel_mode_message() {
        let err = DomainError::UnknownTravelMode("truck".to_string());
        assert_eq!(err.to_string(), "Unknown travel mode: truck");
    }

    #[test]
    fn invalid_coordinates_is_transparent() {
        let err = DomainError::from(InvalidCoordinates);
        assert!(err.to_string().contains("latitude must be -90 to 90"));
    }
}
