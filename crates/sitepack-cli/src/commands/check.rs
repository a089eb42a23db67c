//! Check command implementation.
//!
//! Validates the project without printing the plan.

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;
use sitepack_config::{BuildPlan, ConfigDiscovery, validate_fs};

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load the project file (or defaults) for the selected mode
/// 2. Validate the schema, entry scripts and favicon
/// 3. Resolve the plan, which scans the pages directory
/// 4. Warn about an empty page set and overlapping asset rules
///
/// # Errors
///
/// Returns errors for invalid configuration or missing files.
pub fn execute(args: CheckArgs) -> Result<()> {
    let root = utils::resolve_root(&args.root)?;
    let mode = utils::select_mode(args.mode);

    ui::info(&format!("Checking project in {} ({mode})", root.display()));

    match ConfigDiscovery::new(&root).find() {
        Some(path) => ui::info(&format!("Using {}", path.display())),
        None => ui::warning("No sitepack.toml found, using defaults"),
    }

    let config = utils::load_config(&root, mode)?;
    validate_fs(&config, &root).inspect_err(|_| ui::error("Configuration is invalid"))?;
    ui::success("Configuration is valid!");

    let plan = BuildPlan::resolve(&root, &config, mode)?;

    if plan.pages.is_empty() {
        ui::warning(&format!(
            "No .{} templates in {}, nothing will be rendered",
            config.paths.template_extension,
            config.paths.pages.display()
        ));
    } else {
        ui::success(&format!("{} page(s):", plan.pages.len()));
        for page in plan.page_filenames() {
            ui::info(&format!("  {page}"));
        }
    }

    let overlaps = plan.rules.overlaps();
    for overlap in &overlaps {
        ui::warning(&format!(
            "'.{}' files are claimed by '{}' and '{}'; only '{}' will run",
            overlap.extension, overlap.first, overlap.shadowed, overlap.first
        ));
    }

    ui::info(&format!(
        "{} asset rule(s), {} entr{}, output to {}",
        plan.rules.len(),
        plan.entries.len(),
        if plan.entries.len() == 1 { "y" } else { "ies" },
        plan.output.dir.display()
    ));

    if plan.pages.is_empty() || !overlaps.is_empty() {
        ui::success("Checks passed with warnings");
    } else {
        ui::success("All checks passed!");
    }
    Ok(())
}
