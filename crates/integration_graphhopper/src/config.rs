//! GraphHopper client configuration

use std::fmt;

use serde::{Deserialize, Serialize};

/// Configuration shared by the geocoding and routing clients
#[derive(Clone, Serialize, Deserialize)]
pub struct GraphHopperConfig {
    /// Base URL for the GraphHopper API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `key` query parameter
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Locale for place names and instruction text
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://graphhopper.com/api/1".to_string()
}

fn default_locale() -> String {
    "es".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl fmt::Debug for GraphHopperConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphHopperConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.api_key.is_empty() {
                    None
                } else {
                    Some("[REDACTED]")
                },
            )
            .field("locale", &self.locale)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for GraphHopperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            locale: default_locale(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GraphHopperConfig {
    /// Default configuration with the given API key
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: "test-key".to_string(),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.api_key.trim().is_empty() {
            return Err("api_key must not be empty".to_string());
        }

        if self.locale.is_empty() {
            return Err("locale must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
