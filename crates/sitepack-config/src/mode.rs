//! Build mode selection.
//!
//! The mode is read from the environment exactly once, at process start, and
//! then passed explicitly into every resolution step.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable that selects the build mode.
pub const MODE_ENV_VAR: &str = "NODE_ENV";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    #[default]
    Production,
}

/// How source maps are emitted for a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceMapStyle {
    /// Base64 map appended to each bundle
    InlineSourceMap,
    /// Separate `.map` files next to each bundle
    SourceMap,
}

impl BuildMode {
    /// Map the raw environment value onto a mode.
    ///
    /// Absent, blank and `production`/`prod` select production; any other
    /// value selects development.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::Production,
            Some(v) if v.eq_ignore_ascii_case("production") || v.eq_ignore_ascii_case("prod") => {
                Self::Production
            }
            Some(_) => Self::Development,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn source_maps(self) -> SourceMapStyle {
        match self {
            Self::Development => SourceMapStyle::InlineSourceMap,
            Self::Production => SourceMapStyle::SourceMap,
        }
    }

    /// Profile key used in `[profiles.<mode>]` sections.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::InvalidValue {
                field: "mode".to_string(),
                hint: Some(format!(
                    "unknown mode '{other}', expected 'development' or 'production'"
                )),
            }),
        }
    }
}

/// Read the build mode from [`MODE_ENV_VAR`].
pub fn resolve_mode() -> BuildMode {
    let value = std::env::var(MODE_ENV_VAR).ok();
    let mode = BuildMode::from_env_value(value.as_deref());
    tracing::debug!(env = MODE_ENV_VAR, value = ?value, %mode, "resolved build mode");
    mode
}
