//! Domain layer for rumbo
//!
//! Value objects and entities shared by the geocoding, routing and
//! presentation layers. Everything here is an immutable value created per
//! request and discarded after rendering.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
