//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and loads the
//! application configuration from files and the environment.

pub mod adapters;
pub mod config;

pub use adapters::*;
pub use config::{AppConfig, ConfigValidationError, GraphHopperAppConfig};
