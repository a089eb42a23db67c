//! Minification and code-splitting policy.

use std::path::Path;

use regex::Regex;
use serde::Serialize;

use crate::error::ConfigError;
use crate::mode::BuildMode;
use crate::rules::serialize_regex;

/// Third-party dependency paths, for either path separator.
pub const VENDOR_PATTERN: &str = r"[\\/]node_modules[\\/]";

/// Name of the output unit that collects third-party code.
pub const VENDOR_CHUNK_NAME: &str = "vendors";

/// ECMAScript language level an emitted bundle must stay within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EsTarget {
    /// ECMAScript 5 (no arrow functions, classes, `let`/`const`)
    Es5,
    /// ECMAScript 2015 (ES6)
    Es2015,
    Es2016,
    Es2017,
    Es2018,
    Es2019,
    Es2020,
    Es2021,
    Es2022,
    Es2023,
    Es2024,
    EsNext,
}

impl EsTarget {
    /// Whether code written for `self` also runs on an engine limited to `ceiling`.
    pub fn runs_on(self, ceiling: EsTarget) -> bool {
        self <= ceiling
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Minifier {
    /// Compress and mangle script bundles
    Script {
        /// Highest syntax level the minifier may emit
        ecma: EsTarget,
        /// Minify files on multiple worker threads
        parallel: bool,
    },
    /// Minify extracted stylesheets
    Stylesheet,
}

/// Where the module loader runtime lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeChunk {
    /// One runtime file shared by every entry
    Single,
}

/// Which chunks a cache group may pull modules from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSelection {
    /// Initial and lazily loaded chunks alike
    All,
}

/// Modules whose path matches `test` are moved into the `name` chunk.
#[derive(Debug, Clone, Serialize)]
pub struct CacheGroup {
    pub name: String,
    #[serde(serialize_with = "serialize_regex")]
    pub test: Regex,
    pub chunks: ChunkSelection,
}

impl CacheGroup {
    pub fn matches(&self, module_path: &Path) -> bool {
        self.test.is_match(&module_path.to_string_lossy())
    }
}

impl PartialEq for CacheGroup {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.test.as_str() == other.test.as_str()
            && self.chunks == other.chunks
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationPolicy {
    /// Run the minifiers below
    pub minimize: bool,
    pub minifiers: Vec<Minifier>,
    pub runtime_chunk: RuntimeChunk,
    pub cache_groups: Vec<CacheGroup>,
}

impl OptimizationPolicy {
    pub fn script_target(&self) -> Option<EsTarget> {
        self.minifiers.iter().find_map(|m| match m {
            Minifier::Script { ecma, .. } => Some(*ecma),
            Minifier::Stylesheet => None,
        })
    }

    /// Name of the cache group a module lands in, if any.
    pub fn chunk_for(&self, module_path: &Path) -> Option<&str> {
        self.cache_groups
            .iter()
            .find(|group| group.matches(module_path))
            .map(|group| group.name.as_str())
    }
}

/// Optimization policy for `mode`.
///
/// Production minifies scripts (down to ES5) and stylesheets. Both modes split
/// third-party code into a vendor chunk and share a single runtime chunk.
pub fn assemble_optimization_policy(mode: BuildMode) -> Result<OptimizationPolicy, ConfigError> {
    let vendor = Regex::new(VENDOR_PATTERN).map_err(|e| ConfigError::InvalidValue {
        field: "optimization.cache_groups.vendors".to_string(),
        hint: Some(e.to_string()),
    })?;

    let minifiers = if mode.is_production() {
        vec![
            Minifier::Script {
                ecma: EsTarget::Es5,
                parallel: true,
            },
            Minifier::Stylesheet,
        ]
    } else {
        Vec::new()
    };

    Ok(OptimizationPolicy {
        minimize: mode.is_production(),
        minifiers,
        runtime_chunk: RuntimeChunk::Single,
        cache_groups: vec![CacheGroup {
            name: VENDOR_CHUNK_NAME.to_string(),
            test: vendor,
            chunks: ChunkSelection::All,
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_minifies_scripts_and_styles() {
        let policy = assemble_optimization_policy(BuildMode::Production).unwrap();
        assert!(policy.minimize);
        assert_eq!(policy.minifiers.len(), 2);
        assert_eq!(policy.minifiers[1], Minifier::Stylesheet);
        assert_eq!(policy.script_target(), Some(EsTarget::Es5));
    }

    #[test]
    fn development_skips_minifiers() {
        let policy = assemble_optimization_policy(BuildMode::Development).unwrap();
        assert!(!policy.minimize);
        assert!(policy.minifiers.is_empty());
        assert_eq!(policy.script_target(), None);
    }

    #[test]
    fn runtime_and_vendor_split_in_every_mode() {
        for mode in [BuildMode::Development, BuildMode::Production] {
            let policy = assemble_optimization_policy(mode).unwrap();
            assert_eq!(policy.runtime_chunk, RuntimeChunk::Single);
            assert_eq!(policy.cache_groups.len(), 1);
            assert_eq!(policy.cache_groups[0].chunks, ChunkSelection::All);
        }
    }

    #[test]
    fn vendor_group_matches_dependency_paths() {
        let policy = assemble_optimization_policy(BuildMode::Production).unwrap();
        assert_eq!(
            policy.chunk_for(Path::new("/app/node_modules/lodash/index.js")),
            Some("vendors")
        );
        assert_eq!(
            policy.chunk_for(Path::new(r"C:\app\node_modules\lodash\index.js")),
            Some("vendors")
        );
        assert_eq!(policy.chunk_for(Path::new("/app/src/js/main.js")), None);
        assert_eq!(policy.chunk_for(Path::new("/app/my_node_modules_copy/x.js")), None);
    }

    #[test]
    fn es5_ceiling_rejects_newer_syntax() {
        assert!(EsTarget::Es5.runs_on(EsTarget::Es5));
        assert!(!EsTarget::Es2015.runs_on(EsTarget::Es5));
        assert!(EsTarget::Es5.runs_on(EsTarget::Es2020));
    }
}
