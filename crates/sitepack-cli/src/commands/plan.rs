//! Plan command implementation.
//!
//! Resolves the build plan and writes it to stdout.

use crate::cli::{PlanArgs, PlanFormat};
use crate::commands::utils;
use crate::error::Result;
use sitepack_config::{BuildPlan, validate_schema};

/// Execute the plan command.
///
/// # Errors
///
/// Fails before printing anything if the project file is invalid or the
/// pages directory cannot be scanned.
pub fn execute(args: PlanArgs) -> Result<()> {
    let rendered = render(&args)?;
    println!("{rendered}");
    Ok(())
}

/// Resolve the plan for `args` and serialize it in the requested format.
pub fn render(args: &PlanArgs) -> Result<String> {
    let root = utils::resolve_root(&args.root)?;
    let mode = utils::select_mode(args.mode);
    let config = utils::load_config(&root, mode)?;
    validate_schema(&config)?;

    let plan = BuildPlan::resolve(&root, &config, mode)?;

    let rendered = match args.format {
        PlanFormat::Json => serde_json::to_string_pretty(&plan)?,
        PlanFormat::Toml => toml::to_string_pretty(&plan)?,
    };
    Ok(rendered)
}
