use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::options::helpers::{default_aliases, default_resolve_extensions};

/// Module resolution hints forwarded to the build engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Extensions tried, in order, for extension-less imports
    #[serde(default = "default_resolve_extensions")]
    pub extensions: Vec<String>,

    /// Import prefix aliases (e.g. "@" → "src/")
    #[serde(default = "default_aliases")]
    pub aliases: IndexMap<String, PathBuf>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            extensions: default_resolve_extensions(),
            aliases: default_aliases(),
        }
    }
}
