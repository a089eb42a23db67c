//! Command implementations for the sitepack CLI.
//!
//! - [`plan`] - Resolve and print the build plan
//! - [`check`] - Validate the project
//! - [`init`] - Project scaffolding
//!
//! Each command provides an `execute` function that takes the parsed command
//! arguments and returns a Result.

pub mod check;
pub mod init;
pub mod plan;
mod templates;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use init::execute as init_execute;
pub use plan::execute as plan_execute;
pub use utils::project_log_level;
