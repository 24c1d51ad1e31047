//! Argument parsing and startup shared by the tools

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser};
use lh_auth::AdminLookup;
use lh_config::{Config, ConfigLoader};
use std::path::PathBuf;
use tracing::debug;

/// Options accepted by every tool
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Configuration file path [default: LH_CONFIG_PATH, config.yaml or config.yml]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level, overriding the configured one
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Language for messages shown to the operator
    #[arg(long, default_value = "en")]
    pub lang: String,
}

impl CommonArgs {
    /// Load the configuration file named on the command line, or discover one
    pub fn load_config(&self) -> Result<Config> {
        let config = match &self.config {
            Some(path) => ConfigLoader::load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
            None => ConfigLoader::load().context("Failed to load configuration")?,
        };
        Ok(config)
    }

    /// Start the tracing subscriber from the configuration
    pub fn init_logging(&self, config: &Config) -> Result<()> {
        let mut logging = config.logging.to_logging_config();
        if let Some(level) = &self.log_level {
            logging.level = level.clone();
        }

        lh_common::init_logging(logging).map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;
        debug!("Logging initialized");
        Ok(())
    }
}

/// Arguments of `generate-password-hash`
#[derive(Parser, Debug)]
#[command(
    name = "generate-password-hash",
    author,
    version,
    about = "Hash a password and print the SQL that stores it for the admin user",
    long_about = None
)]
pub struct GenerateArgs {
    /// Password to hash
    pub password: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments of `reset-admin-password`
#[derive(Parser, Debug)]
#[command(
    name = "reset-admin-password",
    author,
    version,
    about = "Replace the admin user's password in the LearnHouse database",
    long_about = None
)]
pub struct ResetArgs {
    /// New password for the admin user
    pub new_password: String,

    /// Admin email to look for, overriding the configuration
    #[arg(long)]
    pub email: Option<String>,

    /// Admin username to look for, overriding the configuration
    #[arg(long)]
    pub username: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl ResetArgs {
    /// Build the admin lookup; command line values win over the configuration
    pub fn admin_lookup(&self, config: &Config) -> AdminLookup {
        AdminLookup {
            email: self.email.clone().unwrap_or_else(|| config.admin.email.clone()),
            username: self
                .username
                .clone()
                .unwrap_or_else(|| config.admin.username.clone()),
        }
    }
}
