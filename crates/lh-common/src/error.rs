//! Error types and utilities shared across the workspace

use thiserror::Error;

/// Result type alias for LearnHouse tooling operations
pub type Result<T> = std::result::Result<T, LhError>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for LearnHouse tooling operations
#[derive(Error, Debug)]
pub enum LhError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Database related errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// Internationalization and localization errors
    #[error("Localization error: {message}")]
    Localization {
        message: String,
        locale: Option<String>,
        #[source]
        source: Option<BoxedSource>,
    },

    /// Password hashing and credential errors
    #[error("Auth error: {message}")]
    Auth {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// Validation errors for operator input
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },
}

impl LhError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new database error with source
    pub fn database_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Database {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new localization error tied to a locale
    pub fn localization_with_locale(
        msg: impl Into<String>,
        locale: Option<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Localization {
            message: msg.into(),
            locale,
            source: Some(Box::new(source)),
        }
    }

    /// Create a new auth error with source
    pub fn auth_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Auth {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }
}
