//! Application layer - Use cases and orchestration
//!
//! Contains the directions use case, the port definitions it depends on,
//! the instruction translator and the itinerary presenter.

pub mod error;
pub mod itinerary;
pub mod ports;
pub mod services;
pub mod translator;

pub use error::{AddressField, DirectionsError};
pub use itinerary::ItineraryPresenter;
pub use ports::*;
pub use services::*;
pub use translator::translate;
