//! Per-page HTML output tasks.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::filename::FilenameTemplate;
use crate::mode::BuildMode;
use crate::options::SiteOptions;
use crate::pages::PageDescriptor;

/// How emitted bundles are named.
///
/// Resolved once from the mode; rules and tasks only ever see this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilenameStrategy {
    /// Stable human-readable names (`js/main.js`)
    Named,
    /// Content-derived identifiers (`js/3f9a…e1.js`), unchanged content keeps its name
    ContentHash,
}

impl FilenameStrategy {
    pub fn for_mode(mode: BuildMode) -> Self {
        match mode {
            BuildMode::Development => Self::Named,
            BuildMode::Production => Self::ContentHash,
        }
    }

    /// Filename template for script bundles.
    pub fn script_template(self) -> Result<FilenameTemplate, ConfigError> {
        FilenameTemplate::parse(match self {
            Self::Named => "js/[name].js",
            Self::ContentHash => "js/[contenthash].js",
        })
    }

    /// Filename template for extracted stylesheets (entry and chunk alike).
    pub fn stylesheet_template(self) -> Result<FilenameTemplate, ConfigError> {
        FilenameTemplate::parse(match self {
            Self::Named => "css/[name].css",
            Self::ContentHash => "css/[contenthash].css",
        })
    }
}

/// Everything the engine needs to render one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputTask {
    /// Template the page is rendered from
    pub template: PathBuf,
    /// HTML filename inside the output directory
    pub filename: String,
    pub title: String,
    pub favicon: PathBuf,
    /// Minify the rendered HTML
    pub minify: bool,
    /// Append a cache-busting hash to injected script and style tags
    pub inject_hash: bool,
    /// Naming of the bundles this page references
    pub filename_strategy: FilenameStrategy,
}

/// Derive one output task per discovered page.
///
/// Pure and deterministic: the same pages and mode always produce the same tasks.
pub fn build_output_tasks(
    pages: &[PageDescriptor],
    mode: BuildMode,
    site: &SiteOptions,
) -> Vec<OutputTask> {
    let strategy = FilenameStrategy::for_mode(mode);

    pages
        .iter()
        .map(|page| OutputTask {
            template: page.source_template_path.clone(),
            filename: page.output_filename.clone(),
            title: site.title.clone(),
            favicon: site.favicon.clone(),
            minify: true,
            inject_hash: true,
            filename_strategy: strategy,
        })
        .collect()
}
