//! Application configuration
//!
//! Sources are layered, later ones overriding earlier ones:
//! built-in defaults, then a TOML file, then `RUMBO__*` environment
//! variables (`RUMBO__GRAPHHOPPER__API_KEY`, `RUMBO__GRAPHHOPPER__TIMEOUT_SECS`, ...).

use std::{fmt, path::Path};

use integration_graphhopper::GraphHopperConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "rumbo";

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "RUMBO";

/// Problems found when validating a loaded configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    /// No GraphHopper API key configured
    #[error(
        "GraphHopper API key is missing; set graphhopper.api_key, RUMBO__GRAPHHOPPER__API_KEY or --api-key"
    )]
    MissingApiKey,

    /// A setting has an unusable value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// GraphHopper API configuration
    #[serde(default)]
    pub graphhopper: GraphHopperAppConfig,
}

/// GraphHopper API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct GraphHopperAppConfig {
    /// Base URL for the GraphHopper API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Locale for place names and instructions
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    GraphHopperConfig::default().base_url
}

fn default_locale() -> String {
    GraphHopperConfig::default().locale
}

fn default_timeout_secs() -> u64 {
    GraphHopperConfig::default().timeout_secs
}

impl Default for GraphHopperAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            locale: default_locale(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl fmt::Debug for GraphHopperAppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphHopperAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("locale", &self.locale)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GraphHopperAppConfig {
    /// Get the API key if one is configured and non-blank
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|key| !key.trim().is_empty())
    }

    /// Convert to the client configuration used by the integration crate
    #[must_use]
    pub fn to_client_config(&self) -> GraphHopperConfig {
        GraphHopperConfig {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            api_key: self.api_key().unwrap_or_default().to_string(),
            locale: self.locale.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, a config file and the environment
    ///
    /// Without `path`, `rumbo.toml` (or any supported extension) in the
    /// working directory is read when present. An explicit `path` must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or a value has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_from(path, config::Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(
        path: Option<&Path>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let defaults = GraphHopperConfig::default();
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("graphhopper.base_url", defaults.base_url)?
            .set_default("graphhopper.locale", defaults.locale)?
            .set_default("graphhopper.timeout_secs", defaults.timeout_secs)?
            .add_source(file)
            // Override with environment variables (e.g., RUMBO__GRAPHHOPPER__API_KEY)
            .add_source(environment.separator("__"));

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Replace the configured API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.graphhopper.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Check that the configuration can be used to talk to GraphHopper
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.graphhopper.api_key().is_none() {
            return Err(ConfigValidationError::MissingApiKey);
        }

        self.graphhopper
            .to_client_config()
            .validate()
            .map_err(ConfigValidationError::Invalid)
    }
}
