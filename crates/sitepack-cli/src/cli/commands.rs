use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

use crate::cli::enums::*;

/// Available sitepack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the build plan and print it
    ///
    /// Discovers page templates, applies the profile for the active mode and
    /// writes the complete plan to stdout.
    Plan(PlanArgs),

    /// Validate the project
    ///
    /// Checks the project file, entry scripts, favicon and pages directory,
    /// then warns about empty page sets and overlapping asset rules.
    Check(CheckArgs),

    /// Scaffold a new project
    ///
    /// Creates the default source layout and a sitepack.toml.
    Init(InitArgs),
}

impl Command {
    /// Directory whose project file applies to this invocation.
    pub fn project_dir(&self) -> &Path {
        match self {
            Command::Plan(args) => &args.root,
            Command::Check(args) => &args.root,
            Command::Init(args) => &args.dir,
        }
    }
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Project root containing sitepack.toml and the source tree
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Build mode, overriding NODE_ENV
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Output format for the plan
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: PlanFormat,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Project root containing sitepack.toml and the source tree
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Build mode, overriding NODE_ENV
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scaffold (created if missing)
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Site title used by every page
    #[arg(short, long)]
    pub title: Option<String>,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}
