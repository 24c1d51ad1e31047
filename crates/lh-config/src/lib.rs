//! Configuration management for the LearnHouse API tooling
//!
//! Settings come from a YAML file (or built-in defaults) with `LH_*`
//! environment variable overrides applied on top, then get validated.

pub mod loader;
pub mod settings;

pub use loader::{ConfigError, ConfigLoader, CONFIG_PATH_ENV};
pub use settings::{AdminConfig, Config, DatabaseConfig, I18nConfig, LoggingSettings, PasswordConfig};
