//! Configuration loading utilities

use crate::Config;
use std::env;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};
use validator::Validate;

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_ENV: &str = "LH_CONFIG_PATH";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for lh_common::LhError {
    fn from(err: ConfigError) -> Self {
        Self::config_with_source("Configuration loading failed", err)
    }
}

/// Configuration loader for the tooling
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        debug!("Reading configuration from {:?}", path.as_ref());
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::parse(&content)?;
        Self::finish(config, |var| env::var(var).ok())
    }

    /// Load configuration from `LH_CONFIG_PATH`, `config.yaml`, `config.yml`,
    /// or built-in defaults, in that order
    pub fn load() -> Result<Config, ConfigError> {
        if let Ok(config_path) = env::var(CONFIG_PATH_ENV) {
            return Self::load_config(config_path);
        }

        for candidate in ["config.yaml", "config.yml"] {
            if Path::new(candidate).exists() {
                return Self::load_config(candidate);
            }
        }

        info!("No configuration file found, using defaults");
        Self::finish(Config::default(), |var| env::var(var).ok())
    }

    /// Parse YAML; absent sections and fields take their defaults
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply overrides from `lookup` (normally the process environment) and validate
    pub fn finish<F>(mut config: Config, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::apply_overrides(&mut config, &lookup)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides<F>(config: &mut Config, lookup: &F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("LH_LOCALES_DIR") {
            config.i18n.locales_dir = dir;
        }

        if let Some(url) = lookup("LH_DATABASE_URL") {
            config.database.url = url;
        }

        if let Some(email) = lookup("LH_ADMIN_EMAIL") {
            config.admin.email = email;
        }

        if let Some(username) = lookup("LH_ADMIN_USERNAME") {
            config.admin.username = username;
        }

        if let Some(iterations) = lookup("LH_PASSWORD_ITERATIONS") {
            config.password.iterations = parse_var("LH_PASSWORD_ITERATIONS", &iterations)?;
        }

        if let Some(level) = lookup("LH_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}

fn parse_var<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::EnvParse {
        var: var.to_string(),
        source: Box::new(e),
    })
}
