//! Ordered asset rules.
//!
//! Rules are evaluated top to bottom and the first match wins, so a file is
//! never handled by two chains.

use std::path::{Component, Path, PathBuf};

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::config::SiteConfig;
use crate::error::ConfigError;
use crate::filename::FilenameTemplate;
use crate::tasks::FilenameStrategy;

/// Filename for images and fonts copied through the asset pipeline.
pub const ASSET_FILENAME: &str = "assets/[hash][ext][query]";

/// One transformation step. Chains list steps in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Handler {
    /// Lower authored scripts with an external transpiler
    Transpile { loader: String, presets: Vec<String> },
    /// Compile Sass/SCSS to CSS
    Sass,
    /// Add vendor prefixes
    PostCss,
    /// Resolve `@import` and `url()` references
    Css,
    /// Write the stylesheet to its own file instead of inlining it
    ExtractCss {
        filename: FilenameTemplate,
        chunk_filename: FilenameTemplate,
    },
    /// Copy the file to the output under a content-derived name
    Resource { filename: FilenameTemplate },
    /// Parse comma/tab separated data into rows
    Csv,
    /// Parse XML into a structured document
    Xml,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssetRule {
    pub name: String,
    /// Lower-case extensions (without the dot) this rule claims
    pub extensions: Vec<String>,
    #[serde(serialize_with = "serialize_regex")]
    pub test: Regex,
    /// Only files under this directory match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<PathBuf>,
    /// Files with this path component never match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
    pub handlers: Vec<Handler>,
}

impl AssetRule {
    /// Create a rule matching any of `extensions`, case-insensitively.
    pub fn new(
        name: impl Into<String>,
        extensions: &[&str],
        handlers: Vec<Handler>,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        let extensions: Vec<String> = extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
            .collect();
        if extensions.is_empty() || extensions.iter().any(String::is_empty) {
            return Err(ConfigError::InvalidValue {
                field: format!("rules.{name}"),
                hint: Some("list at least one non-empty extension, e.g. [\"js\"]".to_string()),
            });
        }

        let alternation = extensions
            .iter()
            .map(|ext| regex::escape(ext))
            .collect::<Vec<_>>()
            .join("|");
        let test = Regex::new(&format!(r"(?i)\.({alternation})$")).map_err(|e| {
            ConfigError::InvalidValue {
                field: format!("rules.{name}"),
                hint: Some(e.to_string()),
            }
        })?;

        Ok(Self {
            name,
            extensions,
            test,
            include: None,
            exclude: None,
            handlers,
        })
    }

    pub fn include(mut self, dir: impl Into<PathBuf>) -> Self {
        self.include = Some(dir.into());
        self
    }

    pub fn exclude(mut self, component: impl Into<String>) -> Self {
        self.exclude = Some(component.into());
        self
    }

    /// Whether this rule applies to `path`.
    pub fn matches(&self, path: &Path) -> bool {
        if !self.test.is_match(&path.to_string_lossy()) {
            return false;
        }

        if let Some(include) = &self.include {
            if !path.starts_with(include) {
                return false;
            }
        }

        if let Some(exclude) = &self.exclude {
            let excluded = path
                .components()
                .any(|c| matches!(c, Component::Normal(part) if part == exclude.as_str()));
            if excluded {
                return false;
            }
        }

        true
    }
}

pub(crate) fn serialize_regex<S: Serializer>(regex: &Regex, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(regex.as_str())
}

impl PartialEq for AssetRule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.extensions == other.extensions
            && self.test.as_str() == other.test.as_str()
            && self.include == other.include
            && self.exclude == other.exclude
            && self.handlers == other.handlers
    }
}

/// An extension claimed by more than one rule. Only `first` will ever see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOverlap {
    pub extension: String,
    pub first: String,
    pub shadowed: String,
}

/// Rules in priority order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AssetRuleSet {
    rules: Vec<AssetRule>,
}

impl AssetRuleSet {
    pub fn new(rules: Vec<AssetRule>) -> Self {
        Self { rules }
    }

    /// First rule matching `path`, if any.
    pub fn match_path(&self, path: &Path) -> Option<&AssetRule> {
        self.rules.iter().find(|rule| rule.matches(path))
    }

    pub fn get(&self, name: &str) -> Option<&AssetRule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Extensions listed by more than one rule, reported against the earlier rule.
    pub fn overlaps(&self) -> Vec<RuleOverlap> {
        let mut overlaps = Vec::new();
        for (i, first) in self.rules.iter().enumerate() {
            for later in &self.rules[i + 1..] {
                for ext in &first.extensions {
                    if later.extensions.contains(ext) {
                        overlaps.push(RuleOverlap {
                            extension: ext.clone(),
                            first: first.name.clone(),
                            shadowed: later.name.clone(),
                        });
                    }
                }
            }
        }
        overlaps
    }
}

/// Build the asset rules for a project.
///
/// Order, first match wins: optional script transpile, styles, images, fonts,
/// tabular data, markup data. Stylesheets are always extracted; only their
/// filenames depend on `strategy`.
pub fn assemble_asset_rules(
    config: &SiteConfig,
    strategy: FilenameStrategy,
) -> Result<AssetRuleSet, ConfigError> {
    let mut rules = Vec::with_capacity(6);

    if let Some(transpile) = &config.transpile {
        let extensions: Vec<&str> = transpile.extensions.iter().map(String::as_str).collect();
        rules.push(
            AssetRule::new(
                "scripts",
                &extensions,
                vec![Handler::Transpile {
                    loader: transpile.loader.clone(),
                    presets: transpile.presets.clone(),
                }],
            )?
            .exclude(transpile.exclude.clone()),
        );
    }

    let stylesheet = strategy.stylesheet_template()?;
    rules.push(
        AssetRule::new(
            "styles",
            &["sass", "scss", "css"],
            vec![
                Handler::Sass,
                Handler::PostCss,
                Handler::Css,
                Handler::ExtractCss {
                    filename: stylesheet.clone(),
                    chunk_filename: stylesheet,
                },
            ],
        )?
        .include(config.paths.src.clone()),
    );

    let asset = FilenameTemplate::parse(ASSET_FILENAME)?;
    rules.push(AssetRule::new(
        "images",
        &["png", "svg", "jpg", "jpeg", "gif"],
        vec![Handler::Resource {
            filename: asset.clone(),
        }],
    )?);
    rules.push(AssetRule::new(
        "fonts",
        &["woff", "woff2", "eot", "ttf", "otf"],
        vec![Handler::Resource { filename: asset }],
    )?);
    rules.push(AssetRule::new("tabular", &["csv", "tsv"], vec![Handler::Csv])?);
    rules.push(AssetRule::new("markup", &["xml"], vec![Handler::Xml])?);

    tracing::debug!(count = rules.len(), ?strategy, "assembled asset rules");

    Ok(AssetRuleSet::new(rules))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::TranspileOptions;

    fn default_rules() -> AssetRuleSet {
        assemble_asset_rules(&SiteConfig::default(), FilenameStrategy::Named).unwrap()
    }

    fn rule_name<'a>(rules: &'a AssetRuleSet, path: &str) -> Option<&'a str> {
        rules.match_path(Path::new(path)).map(|r| r.name.as_str())
    }

    #[test]
    fn empty_extension_list_is_rejected() {
        let err = AssetRule::new("scripts", &[], Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "rules.scripts"
        ));
        assert!(AssetRule::new("scripts", &["js", "."], Vec::new()).is_err());
        assert!(AssetRule::new("scripts", &[".JS"], Vec::new()).is_ok());
    }

    #[test]
    fn default_order() {
        let rules = default_rules();
        let names: Vec<_> = rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["styles", "images", "fonts", "tabular", "markup"]);
    }

    #[test]
    fn dispatches_by_extension() {
        let rules = default_rules();
        assert_eq!(rule_name(&rules, "src/styles/main.scss"), Some("styles"));
        assert_eq!(rule_name(&rules, "src/styles/reset.CSS"), Some("styles"));
        assert_eq!(rule_name(&rules, "src/assets/logo.svg"), Some("images"));
        assert_eq!(rule_name(&rules, "src/assets/fonts/inter.woff2"), Some("fonts"));
        assert_eq!(rule_name(&rules, "src/data/prices.tsv"), Some("tabular"));
        assert_eq!(rule_name(&rules, "src/data/feed.xml"), Some("markup"));
        assert_eq!(rule_name(&rules, "src/js/main.js"), None);
    }

    #[test]
    fn styles_outside_src_do_not_match() {
        let rules = default_rules();
        assert_eq!(rule_name(&rules, "node_modules/lib/index.css"), None);
    }

    #[test]
    fn extension_must_be_a_suffix() {
        let rules = default_rules();
        assert_eq!(rule_name(&rules, "src/assets/logo.png.txt"), None);
        assert_eq!(rule_name(&rules, "src/assets/woff"), None);
    }

    #[test]
    fn style_chain_runs_sass_first_and_extracts_last() {
        let rules = assemble_asset_rules(&SiteConfig::default(), FilenameStrategy::ContentHash)
            .unwrap();
        let styles = rules.get("styles").unwrap();
        assert_eq!(styles.handlers[0], Handler::Sass);
        assert_eq!(styles.handlers[1], Handler::PostCss);
        assert_eq!(styles.handlers[2], Handler::Css);
        let Handler::ExtractCss { filename, .. } = &styles.handlers[3] else {
            panic!("last handler should extract");
        };
        assert_eq!(filename.as_str(), "css/[contenthash].css");
    }

    #[test]
    fn first_listed_rule_wins() {
        let generic = AssetRule::new("generic", &["svg", "png"], vec![Handler::Css]).unwrap();
        let specific = AssetRule::new("specific", &["svg"], vec![Handler::Xml]).unwrap();
        let rules = AssetRuleSet::new(vec![generic, specific]);

        assert_eq!(rule_name(&rules, "icon.svg"), Some("generic"));

        let overlaps = rules.overlaps();
        assert_eq!(
            overlaps,
            vec![RuleOverlap {
                extension: "svg".to_string(),
                first: "generic".to_string(),
                shadowed: "specific".to_string(),
            }]
        );
    }

    #[test]
    fn default_rules_partition_extensions() {
        assert!(default_rules().overlaps().is_empty());
    }

    #[test]
    fn transpile_rule_is_first_and_skips_node_modules() {
        let config = SiteConfig {
            transpile: Some(TranspileOptions::default()),
            ..SiteConfig::default()
        };
        let rules = assemble_asset_rules(&config, FilenameStrategy::Named).unwrap();

        assert_eq!(rules.iter().next().unwrap().name, "scripts");
        assert_eq!(rule_name(&rules, "src/js/main.jsx"), Some("scripts"));
        assert_eq!(rule_name(&rules, "node_modules/react/index.js"), None);
    }

    #[test]
    fn serializes_pattern_as_string() {
        let rules = default_rules();
        let value = serde_json::to_value(&rules).unwrap();
        assert_eq!(value[2]["name"], "fonts");
        assert_eq!(value[2]["test"], r"(?i)\.(woff|woff2|eot|ttf|otf)$");
        assert_eq!(value[0]["handlers"][3]["kind"], "extract-css");
    }
}
