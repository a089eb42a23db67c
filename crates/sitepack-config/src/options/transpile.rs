use serde::{Deserialize, Serialize};

use crate::options::helpers::{
    default_transpile_exclude, default_transpile_extensions, default_transpile_loader,
    default_transpile_presets,
};

/// Optional script transpilation step.
///
/// Disabled unless the project file has a `[transpile]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranspileOptions {
    /// Script extensions (without the dot) routed through the transpiler
    #[serde(default = "default_transpile_extensions")]
    pub extensions: Vec<String>,

    /// Path segment whose files are never transpiled
    #[serde(default = "default_transpile_exclude")]
    pub exclude: String,

    /// Loader the build engine invokes
    #[serde(default = "default_transpile_loader")]
    pub loader: String,

    /// Presets passed to the loader
    #[serde(default = "default_transpile_presets")]
    pub presets: Vec<String>,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        Self {
            extensions: default_transpile_extensions(),
            exclude: default_transpile_exclude(),
            loader: default_transpile_loader(),
            presets: default_transpile_presets(),
        }
    }
}
