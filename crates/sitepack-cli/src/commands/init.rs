//! Init command implementation.
//!
//! Scaffolds the source tree the default configuration expects.

use crate::cli::InitArgs;
use crate::commands::templates;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;
use sitepack_config::{CONFIG_FILE_NAME, SiteOptions};
use std::fs;
use std::path::Path;

/// Execute the init command.
///
/// # Process
///
/// 1. Refuse to touch an initialized project unless `--force`
/// 2. Create the directory layout
/// 3. Write the page, script, stylesheet, favicon and sitepack.toml
/// 4. Show next steps
///
/// Existing source files are kept unless `--force` is given.
///
/// # Errors
///
/// Returns errors for an already initialized directory and write failures.
pub fn execute(args: InitArgs) -> Result<()> {
    let dir = args.dir.as_path();
    let title = args
        .title
        .clone()
        .unwrap_or_else(|| SiteOptions::default().title);

    if title.trim().is_empty() {
        return Err(CliError::InvalidArgument(
            "Site title cannot be empty".to_string(),
        ));
    }

    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() && !args.force {
        return Err(CliError::InvalidArgument(format!(
            "'{}' already exists; pass --force to overwrite",
            config_path.display()
        )));
    }

    ui::info(&format!("Scaffolding {} in {}", title, dir.display()));

    let files = [
        (templates::INDEX_PAGE, templates::index_html(&title)),
        (templates::MAIN_SCRIPT, templates::main_js().to_string()),
        (templates::MAIN_STYLESHEET, templates::main_scss().to_string()),
        (templates::FAVICON, templates::favicon_svg().to_string()),
        (CONFIG_FILE_NAME, templates::site_toml(&title)?),
    ];

    for (relative, contents) in &files {
        write_file(dir, relative, contents, args.force)?;
    }

    print_next_steps(dir);
    ui::success("Project created successfully!");
    Ok(())
}

fn write_file(dir: &Path, relative: &str, contents: &str, force: bool) -> Result<()> {
    let path = dir.join(relative);

    if path.exists() && !force {
        ui::warning(&format!("  Kept existing {relative}"));
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_path(parent)
            .context(format!("Failed to create {}", parent.display()))
            .with_hint(format!("Check that {} is a writable directory", dir.display()))?;
    }
    fs::write(&path, contents)
        .context(format!("Failed to write {}", path.display()))
        .with_hint(format!("Check that {} is a writable directory", dir.display()))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote scaffold file");
    ui::success(&format!("  Created {relative}"));
    Ok(())
}

fn print_next_steps(dir: &Path) {
    eprintln!();
    eprintln!("Next steps:");
    if dir != Path::new(".") {
        eprintln!("  cd {}", dir.display());
    }
    eprintln!("  sitepack check");
    eprintln!("  NODE_ENV=development sitepack plan");
    eprintln!();
}
