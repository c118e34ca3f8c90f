//! TOML configuration: logging, session storage, demo collaborators.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{Config, DemoConfig, LoggingConfig, PlaceConfig, RideOptionConfig, SessionConfig};
