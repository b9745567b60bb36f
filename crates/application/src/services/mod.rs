//! Application services - Use case implementations

mod directions_service;

pub use directions_service::DirectionsService;
