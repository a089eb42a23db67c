//! The resolved build plan.
//!
//! `BuildPlan::resolve` runs every resolution step once, top to bottom, and
//! either returns a complete plan or fails; there is no partial plan.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::dev::{DevServerConfig, assemble_dev_server_config};
use crate::error::Result;
use crate::filename::FilenameTemplate;
use crate::mode::{BuildMode, SourceMapStyle};
use crate::optimization::{OptimizationPolicy, assemble_optimization_policy};
use crate::options::ResolveOptions;
use crate::pages::{PageDescriptor, discover_pages};
use crate::rules::{ASSET_FILENAME, AssetRuleSet, assemble_asset_rules};
use crate::tasks::{FilenameStrategy, OutputTask, build_output_tasks};

/// Where and how bundles are written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputSettings {
    pub dir: PathBuf,
    /// Empty `dir` before writing
    pub clean: bool,
    pub script_filename: FilenameTemplate,
    pub css_filename: FilenameTemplate,
    pub css_chunk_filename: FilenameTemplate,
    /// Name for files emitted by `Resource` handlers
    pub asset_filename: FilenameTemplate,
}

impl OutputSettings {
    pub fn new(dir: PathBuf, clean: bool, strategy: FilenameStrategy) -> Result<Self> {
        let css = strategy.stylesheet_template()?;
        Ok(Self {
            dir,
            clean,
            script_filename: strategy.script_template()?,
            css_filename: css.clone(),
            css_chunk_filename: css,
            asset_filename: FilenameTemplate::parse(ASSET_FILENAME)?,
        })
    }
}

/// Static files copied verbatim, without going through any rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyPattern {
    pub from: PathBuf,
    /// Destination relative to the output directory
    pub to: String,
}

/// Everything an external build engine needs for one run.
///
/// Paths are relative to `root` unless they were configured as absolute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildPlan {
    pub root: PathBuf,
    pub mode: BuildMode,
    pub source_maps: SourceMapStyle,
    pub entries: IndexMap<String, PathBuf>,
    pub output: OutputSettings,
    pub pages: Vec<OutputTask>,
    pub rules: AssetRuleSet,
    pub optimization: OptimizationPolicy,
    pub copy: Vec<CopyPattern>,
    pub resolve: ResolveOptions,
    pub dev_server: DevServerConfig,
}

impl BuildPlan {
    /// Resolve the plan for `config` rooted at `root`.
    ///
    /// `config` should already have its profile for `mode` applied.
    ///
    /// # Errors
    ///
    /// Fails with `ConfigError::Discovery` if the pages directory is missing
    /// or unreadable. A pages directory with no templates is not an error.
    pub fn resolve(root: &Path, config: &SiteConfig, mode: BuildMode) -> Result<Self> {
        let pages_dir = root.join(&config.paths.pages);
        let pages = discover_pages(&pages_dir, &config.paths.template_extension)?;
        let pages = relative_to(root, pages);

        if pages.is_empty() {
            tracing::warn!(dir = %pages_dir.display(), "no page templates found");
        }

        let strategy = FilenameStrategy::for_mode(mode);
        let plan = Self {
            root: root.to_path_buf(),
            mode,
            source_maps: mode.source_maps(),
            entries: config.paths.entries.clone(),
            output: OutputSettings::new(config.paths.output.clone(), config.paths.clean, strategy)?,
            pages: build_output_tasks(&pages, mode, &config.site),
            rules: assemble_asset_rules(config, strategy)?,
            optimization: assemble_optimization_policy(mode)?,
            copy: vec![CopyPattern {
                from: config.paths.assets.clone(),
                to: config.paths.assets_output.clone(),
            }],
            resolve: config.resolve.clone(),
            dev_server: assemble_dev_server_config(config),
        };

        tracing::info!(
            %mode,
            pages = plan.pages.len(),
            rules = plan.rules.len(),
            "resolved build plan"
        );

        Ok(plan)
    }

    /// Output filenames of every page, in discovery order.
    pub fn page_filenames(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|task| task.filename.as_str())
    }
}

// Keep template paths in the plan relative to the project root.
fn relative_to(root: &Path, pages: Vec<PageDescriptor>) -> Vec<PageDescriptor> {
    pages
        .into_iter()
        .map(|mut page| {
            if let Ok(rel) = page.source_template_path.strip_prefix(root) {
                page.source_template_path = rel.to_path_buf();
            }
            page
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, DiscoveryError};
    use std::fs;
    use tempfile::TempDir;

    fn site_with_pages(names: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        let pages = dir.path().join("src/pages");
        fs::create_dir_all(&pages).unwrap();
        for name in names {
            fs::write(pages.join(name), "<main></main>").unwrap();
        }
        dir
    }

    #[test]
    fn development_plan_uses_named_outputs() {
        let dir = site_with_pages(&["index.html"]);
        let plan =
            BuildPlan::resolve(dir.path(), &SiteConfig::default(), BuildMode::Development)
                .unwrap();

        assert_eq!(plan.output.script_filename.as_str(), "js/[name].js");
        assert_eq!(plan.output.css_filename.as_str(), "css/[name].css");
        assert_eq!(plan.output.asset_filename.as_str(), "assets/[hash][ext][query]");
        assert_eq!(plan.source_maps, SourceMapStyle::InlineSourceMap);
        assert_eq!(plan.pages[0].template, PathBuf::from("src/pages/index.html"));
        assert!(!plan.optimization.minimize);
    }

    #[test]
    fn production_plan_uses_content_hashes() {
        let dir = site_with_pages(&["index.html"]);
        let plan = BuildPlan::resolve(dir.path(), &SiteConfig::default(), BuildMode::Production)
            .unwrap();

        assert!(plan.output.script_filename.is_content_addressed());
        assert!(plan.output.css_chunk_filename.is_content_addressed());
        assert_eq!(plan.source_maps, SourceMapStyle::SourceMap);
        assert!(plan.optimization.minimize);
    }

    #[test]
    fn missing_pages_directory_aborts() {
        let dir = TempDir::new().unwrap();
        let err = BuildPlan::resolve(dir.path(), &SiteConfig::default(), BuildMode::Production)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Discovery(DiscoveryError::Missing { .. })
        ));
    }

    #[test]
    fn defaults_copy_assets_and_keep_main_entry() {
        let dir = site_with_pages(&[]);
        let plan = BuildPlan::resolve(dir.path(), &SiteConfig::default(), BuildMode::Production)
            .unwrap();

        assert!(plan.pages.is_empty());
        assert_eq!(
            plan.copy,
            vec![CopyPattern {
                from: PathBuf::from("src/assets"),
                to: "assets".to_string(),
            }]
        );
        assert_eq!(plan.entries["main"], PathBuf::from("src/js/main.js"));
        assert_eq!(plan.resolve.aliases["@"], PathBuf::from("src/"));
        assert!(plan.output.clean);
    }

    #[test]
    fn plan_serializes_to_json() {
        let dir = site_with_pages(&["index.html"]);
        let plan = BuildPlan::resolve(dir.path(), &SiteConfig::default(), BuildMode::Production)
            .unwrap();
        let value = serde_json::to_value(&plan).unwrap();

        assert_eq!(value["mode"], "production");
        assert_eq!(value["source_maps"], "source-map");
        assert_eq!(value["pages"][0]["filename_strategy"], "content-hash");
        assert_eq!(value["optimization"]["minifiers"][0]["ecma"], "es5");
        assert_eq!(value["dev_server"]["port"], 3000);
    }
}
