//! Geocoded place

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoLocation;

/// Result of resolving a free-text address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Resolved coordinate
    pub location: GeoLocation,
    /// Canonical place name as returned by the geocoder
    pub name: String,
}

impl Place {
    /// Create a new place
    #[must_use]
    pub fn new(location: GeoLocation, name: impl Into<String>) -> Self {
        Self {
            location,
            name: name.into(),
        }
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.location)
    }
}
