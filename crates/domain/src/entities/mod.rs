//! Domain entities - Geocoded places and computed routes

mod place;
mod route;

pub use place::Place;
pub use route::{Instruction, Route, RouteRequest};
