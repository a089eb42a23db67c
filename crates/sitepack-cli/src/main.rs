//! sitepack CLI - build plans for multi-page front-end projects.
//!
//! This is the main entry point for the sitepack CLI. It handles command-line
//! argument parsing, logging initialization, and command dispatch.

use clap::Parser;
use miette::Result;
use sitepack_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // The project file may carry a default log level
    let settings_level = commands::project_log_level(args.command.project_dir());

    logger::init_logger_with_default(
        args.verbose,
        args.quiet,
        args.no_color,
        settings_level.as_deref(),
    );
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Plan(plan_args) => commands::plan_execute(plan_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Init(init_args) => commands::init_execute(init_args),
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
