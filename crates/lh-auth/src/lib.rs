//! Password hashing and admin credential reset for the LearnHouse API
//!
//! Hashes are PBKDF2-HMAC-SHA256 strings of the form
//! `$pbkdf2-sha256$<iterations>$<salt>$<hash>`, readable by the API's login
//! path. The [`UserStore`] trait is the only view of the database this crate
//! needs.

pub mod error;
pub mod password;
pub mod reset;
pub mod store;

pub use error::{AuthError, AuthResult};
pub use password::{
    validate_new_password, PasswordHash, PasswordHasher, Pbkdf2Sha256, ALGORITHM,
    DEFAULT_ITERATIONS, KEY_LEN, SALT_LEN,
};
pub use reset::{reset_admin_password, AdminLookup, ResetOutcome};
pub use store::{AdminUser, SqlUserStore, UserStore};
