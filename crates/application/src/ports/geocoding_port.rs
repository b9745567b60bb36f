//! Geocoding port
//!
//! Resolves a free-text address into a [`Place`]. Adapters in the
//! infrastructure layer implement this port using a geocoding API.

use async_trait::async_trait;
use domain::Place;
#[cfg(test)]
use mockall::automock;

use crate::error::DirectionsError;

/// Port for address geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve an address to its best matching place
    ///
    /// Returns `DirectionsError::AddressNotFound` when the service has no
    /// match; transport failures map to `DirectionsError::Transport`.
    async fn geocode(&self, address: &str) -> Result<Place, DirectionsError>;
}
