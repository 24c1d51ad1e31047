//! Operator tools for LearnHouse admin credentials
//!
//! Two binaries share this library:
//!
//! - `generate-password-hash <password>` prints a PBKDF2-SHA256 hash and the
//!   SQL statement that stores it for the admin account.
//! - `reset-admin-password <new_password>` writes a fresh hash straight into
//!   the configured database.
//!
//! Tool output goes to stdout; logs go to stderr (or the configured file).

pub mod cli;
pub mod output;

pub use cli::{CommonArgs, GenerateArgs, ResetArgs};
pub use output::{password_too_short, render_generated, render_not_found, render_reset};
