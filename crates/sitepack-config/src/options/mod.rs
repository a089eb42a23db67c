//! Project-file sections shared by the resolver and the CLI.

mod helpers;
mod resolve;
mod site;
mod transpile;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use resolve::ResolveOptions;
pub use site::SiteOptions;
pub use transpile::TranspileOptions;

use helpers::{
    default_assets_dir, default_assets_output, default_entries, default_output_dir,
    default_pages_dir, default_src_dir, default_template_extension, default_true,
};

/// Source tree layout and output location.
///
/// All paths are relative to the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathOptions {
    /// Root of the authored sources; styles are only compiled from here
    #[serde(default = "default_src_dir")]
    pub src: PathBuf,

    /// Directory scanned (non-recursively) for page templates
    #[serde(default = "default_pages_dir")]
    pub pages: PathBuf,

    /// Static assets copied verbatim into the output
    #[serde(default = "default_assets_dir")]
    pub assets: PathBuf,

    /// Destination of the copied static assets, relative to `output`
    #[serde(default = "default_assets_output")]
    pub assets_output: String,

    /// Output directory for every generated file
    #[serde(default = "default_output_dir")]
    pub output: PathBuf,

    /// Remove stale files from `output` before emitting
    #[serde(default = "default_true")]
    pub clean: bool,

    /// Extension (without the dot) that marks a page template
    #[serde(default = "default_template_extension")]
    pub template_extension: String,

    /// Named script entry points, in declaration order
    #[serde(default = "default_entries")]
    pub entries: IndexMap<String, PathBuf>,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            src: default_src_dir(),
            pages: default_pages_dir(),
            assets: default_assets_dir(),
            assets_output: default_assets_output(),
            output: default_output_dir(),
            clean: true,
            template_extension: default_template_extension(),
            entries: default_entries(),
        }
    }
}

impl PathOptions {
    /// Add or replace a script entry.
    ///
    /// # Example
    /// ```
    /// use sitepack_config::PathOptions;
    ///
    /// let paths = PathOptions::default().with_entry("admin", "src/js/admin.js");
    /// assert_eq!(paths.entries.len(), 2);
    /// ```
    pub fn with_entry(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.entries.insert(name.into(), path.into());
        self
    }
}
