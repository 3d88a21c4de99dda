use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::repositories::SimulatedLatency;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading error: {message}")]
    LoadError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub fixtures: FixtureConfig,
    pub latency: LatencyConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureConfig {
    /// Directory holding the four fixture documents; bundled copies are
    /// used when unset
    #[serde(default)]
    pub fixtures_dir: Option<PathBuf>,
}

/// Simulated network latency tiers, in milliseconds
#[derive(Debug, Clone, Deserialize)]
pub struct LatencyConfig {
    #[serde(default = "default_lookup_delay_ms")]
    pub lookup_delay_ms: u64,
    #[serde(default = "default_collection_delay_ms")]
    pub collection_delay_ms: u64,
    #[serde(default = "default_submission_delay_ms")]
    pub submission_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_service_version")]
    pub service_version: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_enable_json_logging")]
    pub enable_json_logging: bool,
}

impl Config {
    pub fn from_environment() -> Result<Self, ConfigError> {
        info!("Loading configuration from environment");

        let server = ServerConfig::from_env()?;
        let fixtures = FixtureConfig::from_env()?;
        let latency = LatencyConfig::from_env()?;
        let observability = ObservabilityConfig::from_env()?;

        let config = Config {
            server,
            fixtures,
            latency,
            observability,
        };

        config.validate()?;

        info!("Configuration loaded successfully");
        debug!("Configuration: {:?}", config);

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError {
                message: "Server port cannot be 0".to_string(),
            });
        }

        if self.server.request_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Request timeout cannot be 0".to_string(),
            });
        }

        if let Some(dir) = &self.fixtures.fixtures_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "Fixtures directory cannot be empty when set".to_string(),
                });
            }
        }

        Ok(())
    }
}

fn from_env_with_prefix<T: serde::de::DeserializeOwned>(section: &str) -> Result<T, ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::Environment::with_prefix("RESORT"))
        .build()
        .map_err(|e| ConfigError::LoadError {
            message: format!("Failed to load {} config: {}", section, e),
        })?;

    settings
        .try_deserialize()
        .map_err(|e| ConfigError::LoadError {
            message: format!("Failed to deserialize {} config: {}", section, e),
        })
}

impl ServerConfig {
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        from_env_with_prefix("server")
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl FixtureConfig {
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        from_env_with_prefix("fixtures")
    }
}

impl LatencyConfig {
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        from_env_with_prefix("latency")
    }

    /// Convert the configured millisecond tiers into runtime delays
    pub fn simulated_latency(&self) -> SimulatedLatency {
        SimulatedLatency::new(
            Duration::from_millis(self.lookup_delay_ms),
            Duration::from_millis(self.collection_delay_ms),
            Duration::from_millis(self.submission_delay_ms),
        )
    }
}

impl ObservabilityConfig {
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        from_env_with_prefix("observability")
    }
}

// Default value functions
pub(crate) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(crate) fn default_port() -> u16 {
    8080
}

pub(crate) fn default_timeout() -> u64 {
    30
}

pub(crate) fn default_lookup_delay_ms() -> u64 {
    300
}

pub(crate) fn default_collection_delay_ms() -> u64 {
    500
}

pub(crate) fn default_submission_delay_ms() -> u64 {
    1500
}

pub(crate) fn default_service_name() -> String {
    "resort-rs".to_string()
}

pub(crate) fn default_service_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

pub(crate) fn default_enable_json_logging() -> bool {
    false
}

#[cfg(test)]
mod tests;
