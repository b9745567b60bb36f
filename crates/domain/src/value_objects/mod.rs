//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod travel_mode;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use travel_mode::TravelMode;
