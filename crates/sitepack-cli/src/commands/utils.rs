//! Shared utilities for command implementations.

use crate::cli::ModeArg;
use crate::error::{CliError, Result};
use sitepack_config::{BuildMode, ConfigDiscovery, SiteConfig, resolve_mode};
use std::path::{Path, PathBuf};

/// Validate the `--root` argument.
pub fn resolve_root(root: &Path) -> Result<PathBuf> {
    if !root.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "project root '{}' is not a directory",
            root.display()
        )));
    }
    Ok(root.to_path_buf())
}

/// `--mode` if given, otherwise the environment.
pub fn select_mode(mode: Option<ModeArg>) -> BuildMode {
    match mode {
        Some(mode) => {
            let mode = BuildMode::from(mode);
            tracing::debug!(%mode, "build mode set on the command line");
            mode
        }
        None => resolve_mode(),
    }
}

/// Load the project file under `root` (or the defaults) with the profile for `mode` applied.
pub fn load_config(root: &Path, mode: BuildMode) -> Result<SiteConfig> {
    Ok(ConfigDiscovery::new(root).load_for_mode(mode)?)
}

/// `[settings] log_level` of the project in `dir`, if readable.
///
/// Runs before logging is set up, so failures are ignored here and reported
/// by the command itself.
pub fn project_log_level(dir: &Path) -> Option<String> {
    ConfigDiscovery::new(dir)
        .load_or_default()
        .ok()
        .and_then(|config| config.settings.log_level)
}
