use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::{Config, PlaceConfig};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

impl Config {
    /// `rideflow/config.toml` under the platform config directory, or the
    /// current directory when there is none.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("rideflow").join("config.toml")
    }

    /// Load from [`Config::config_path`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load and validate `path`. A missing file yields `Config::default()`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - the log level is one `tracing` understands
    /// - the demo has a positive timeout, at least one dropoff and ride option
    /// - ride option ids are unique and coordinates are on the globe
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(invalid(format!(
                "Unknown log level '{}', expected one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        let demo = &self.demo;
        if demo.request_timeout_ms == 0 {
            return Err(invalid("demo.request_timeout_ms must be positive"));
        }
        if demo.dropoffs.is_empty() {
            return Err(invalid("At least one demo dropoff must be configured"));
        }
        if demo.ride_options.is_empty() {
            return Err(invalid("At least one demo ride option must be configured"));
        }

        let mut seen = HashSet::new();
        for option in &demo.ride_options {
            if !seen.insert(option.id.as_str()) {
                return Err(invalid(format!("Duplicate ride option id '{}'", option.id)));
            }
        }

        for place in std::iter::once(&demo.pickup).chain(&demo.dropoffs) {
            validate_place(place)?;
        }

        Ok(())
    }
}

fn validate_place(place: &PlaceConfig) -> Result<(), ConfigError> {
    if !(-90.0..=90.0).contains(&place.latitude) || !(-180.0..=180.0).contains(&place.longitude) {
        return Err(invalid(format!(
            "Place '{}' has invalid coordinates ({}, {})",
            place.name, place.latitude, place.longitude
        )));
    }
    Ok(())
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        message: message.into(),
    }
}
