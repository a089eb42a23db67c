//! Command-line interface definition for sitepack.
//!
//! # Command Structure
//!
//! - `sitepack plan` - Resolve the build plan and print it
//! - `sitepack check` - Validate the project without printing the plan
//! - `sitepack init` - Scaffold a new project

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{CheckArgs, Command, InitArgs, PlanArgs};
pub use enums::*;

/// sitepack - build plans for multi-page front-end projects
#[derive(Parser, Debug)]
#[command(
    name = "sitepack",
    version,
    about = "Resolve build plans for multi-page front-end projects",
    long_about = "sitepack turns a source tree of page templates, scripts, styles and static\n\
                  assets into a build plan: one HTML task per page, ordered asset rules,\n\
                  an optimization policy and dev-server settings.\n\n\
                  The build mode is read from NODE_ENV unless --mode is given."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    ///
    /// Outputs plain text without ANSI color codes. Useful for logging to
    /// files or systems that don't support colored terminal output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
