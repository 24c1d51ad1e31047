//! Structured logging setup built on `tracing-subscriber`

use std::sync::Mutex;
use tracing_subscriber::{
    fmt::{self, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

type InitResult = std::result::Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Output format of the log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human oriented output
    #[default]
    Pretty,
    /// Single-line output
    Compact,
    /// Newline-delimited JSON
    Json,
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "lh_i18n=debug")
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Optional file path for log output; stderr when unset
    pub file_path: Option<String>,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file_path: None,
            include_targets: true,
        }
    }
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// `RUST_LOG` is not consulted; the filter comes from `config.level` and falls
/// back to `info` when the directive does not parse.
pub fn init_logging(config: LoggingConfig) -> InitResult {
    let env_filter = EnvFilter::try_new(&config.level).or_else(|_| EnvFilter::try_new("info"))?;

    // Logs never share stdout with the tools' own output.
    let writer = match &config.file_path {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };
    let ansi = config.file_path.is_none();

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_ansi(ansi)
                    .with_target(config.include_targets)
                    .with_writer(writer),
            )
            .try_init()?,
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_ansi(ansi)
                    .with_target(config.include_targets)
                    .with_writer(writer),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(config.include_targets)
                    .with_writer(writer),
            )
            .try_init()?,
    }

    Ok(())
}

/// Initialize logging with default configuration
pub fn init_default_logging() -> InitResult {
    init_logging(LoggingConfig::default())
}

/// Initialize terse logging for the operator tools
pub fn init_cli_logging(level: impl Into<String>) -> InitResult {
    init_logging(LoggingConfig {
        level: level.into(),
        format: LogFormat::Compact,
        include_targets: false,
        ..LoggingConfig::default()
    })
}
