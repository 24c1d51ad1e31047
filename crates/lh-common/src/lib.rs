//! # LH Common
//!
//! Shared error types and logging setup for the LearnHouse API tooling.
//!
//! Every other crate in the workspace converts its own error enum into
//! [`LhError`] at the boundary, and binaries initialise tracing through
//! [`init_logging`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;

pub use error::{LhError, Result};
pub use logging::{init_cli_logging, init_default_logging, init_logging, LogFormat, LoggingConfig};
