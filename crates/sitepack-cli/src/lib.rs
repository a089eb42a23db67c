//! sitepack CLI - build plans for multi-page front-end projects.
//!
//! This crate wraps [`sitepack_config`] in a command-line interface:
//!
//! - `sitepack plan` resolves the build plan and prints it as JSON or TOML
//! - `sitepack check` validates the project and reports suspicious setups
//! - `sitepack init` scaffolds the source tree the defaults expect
//!
//! # Modules
//!
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status messages for the terminal
//! - `commands` - Individual CLI command implementations
//!
//! # Example
//!
//! ```rust
//! use sitepack_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     // CLI command implementations...
//!     Ok(())
//! }
//! ```

// Public modules
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, Result, ResultExt};
