//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod graphhopper_adapter;

pub use graphhopper_adapter::GraphHopperAdapter;
