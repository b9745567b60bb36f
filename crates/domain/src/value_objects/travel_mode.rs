//! Travel mode value object

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Vehicle profile used when requesting a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    /// Car (default)
    #[default]
    Car,
    /// Bicycle
    Bike,
    /// Walking
    Foot,
    /// Motorcycle
    Motorcycle,
}

impl TravelMode {
    /// All modes in menu order
    pub const ALL: [Self; 4] = [Self::Car, Self::Bike, Self::Foot, Self::Motorcycle];

    /// Value sent as the `vehicle` query parameter
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Bike => "bike",
            Self::Foot => "foot",
            Self::Motorcycle => "motorcycle",
        }
    }

    /// Spanish menu label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Car => "Automóvil",
            Self::Bike => "Bicicleta",
            Self::Foot => "A pie",
            Self::Motorcycle => "Motocicleta",
        }
    }

    /// Map a vehicle menu answer ("1" to "4") to a mode
    ///
    /// Blank or unrecognised answers select [`TravelMode::Car`].
    #[must_use]
    pub fn from_menu_choice(choice: &str) -> Self {
        match choice.trim() {
            "2" => Self::Bike,
            "3" => Self::Foot,
            "4" => Self::Motorcycle,
            _ => Self::Car,
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "bike" => Ok(Self::Bike),
            "foot" => Ok(Self::Foot),
            "motorcycle" => Ok(Self::Motorcycle),
            other => Err(DomainError::UnknownTravelMode(other.to_string())),
        }
    }
}
