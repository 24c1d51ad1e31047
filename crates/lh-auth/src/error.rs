//! Error types for credential operations

use thiserror::Error;

/// Errors raised while hashing, verifying or storing passwords
#[derive(Error, Debug)]
pub enum AuthError {
    /// The stored hash is not `$alg$iterations$salt$hash`
    #[error("Invalid password hash format: {0}")]
    InvalidHashFormat(String),

    /// The stored hash uses an algorithm other than PBKDF2-SHA256
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// A new password does not meet the length policy
    #[error("Password must be at least {min_length} characters long")]
    PasswordTooShort { min_length: usize },

    /// The database rejected a query or could not be reached
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The update matched no rows
    #[error("User {user_id} was not updated")]
    NotUpdated { user_id: i64 },
}

/// Result type for credential operations
pub type AuthResult<T> = Result<T, AuthError>;

impl From<AuthError> for lh_common::LhError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::PasswordTooShort { .. } => Self::validation_field(err.to_string(), "password"),
            AuthError::Database(_) | AuthError::NotUpdated { .. } => {
                Self::database_with_source("Credential update failed", err)
            }
            AuthError::InvalidHashFormat(_) | AuthError::UnsupportedAlgorithm(_) => {
                Self::auth_with_source("Password hash rejected", err)
            }
        }
    }
}
