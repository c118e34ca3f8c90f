use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::app::model::{Location, RideOption, RideOptionId};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset ("trace" ... "error", "off").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Where the signed-in session is kept between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// JSON file for the session. Kept in memory when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Parameters of the in-memory collaborators used by the demo run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Simulated latency of every collaborator call.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Upper bound for one collaborator call.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default = "default_pickup")]
    pub pickup: PlaceConfig,
    #[serde(default = "default_dropoffs")]
    pub dropoffs: Vec<PlaceConfig>,
    #[serde(default = "default_ride_options")]
    pub ride_options: Vec<RideOptionConfig>,
    #[serde(default)]
    pub fail_location: bool,
    #[serde(default)]
    pub reject_ride_requests: bool,
}

impl DemoConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            request_timeout_ms: default_request_timeout_ms(),
            pickup: default_pickup(),
            dropoffs: default_dropoffs(),
            ride_options: default_ride_options(),
            fail_location: false,
            reject_ride_requests: false,
        }
    }
}

/// A named coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceConfig {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl PlaceConfig {
    fn new(name: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.to_string(),
            latitude,
            longitude,
        }
    }

    pub fn to_location(&self) -> Location {
        Location {
            id: self.name.to_lowercase().replace(' ', "-"),
            name: self.name.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideOptionConfig {
    pub id: String,
    pub name: String,
    #[serde(default = "default_max_riders")]
    pub max_riders: u8,
}

impl RideOptionConfig {
    fn new(id: &str, name: &str, max_riders: u8) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            max_riders,
        }
    }

    pub fn to_ride_option(&self) -> RideOption {
        RideOption {
            id: RideOptionId::new(&self.id),
            name: self.name.clone(),
            max_riders: self.max_riders,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_latency_ms() -> u64 {
    150
}

fn default_request_timeout_ms() -> u64 {
    5_000
}

fn default_max_riders() -> u8 {
    4
}

fn default_pickup() -> PlaceConfig {
    PlaceConfig::new("Ferry Building", 37.7955, -122.3937)
}

fn default_dropoffs() -> Vec<PlaceConfig> {
    vec![
        PlaceConfig::new("Mission Dolores", 37.7599, -122.4268),
        PlaceConfig::new("SFO Terminal 2", 37.6167, -122.3847),
    ]
}

fn default_ride_options() -> Vec<RideOptionConfig> {
    vec![
        RideOptionConfig::new("wallet", "Wallet Saver", 4),
        RideOptionConfig::new("premium", "Premium", 4),
        RideOptionConfig::new("xl", "XL", 6),
    ]
}
