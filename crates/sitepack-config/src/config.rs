//! High-level project configuration for sitepack.
//!
//! This module provides the main `SiteConfig` struct and per-mode profile
//! merging. For file discovery, see the `discovery` module.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dev::DevServerConfig;
use crate::error::{ConfigError, Result as ConfigResult};
use crate::mode::BuildMode;
use crate::options::{PathOptions, ResolveOptions, SiteOptions, TranspileOptions};
use crate::settings::GlobalSettings;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteOptions,

    #[serde(default)]
    pub paths: PathOptions,

    #[serde(default)]
    pub dev: Option<DevServerConfig>,

    #[serde(default)]
    pub resolve: ResolveOptions,

    #[serde(default)]
    pub transpile: Option<TranspileOptions>,

    #[serde(default)]
    pub settings: GlobalSettings,

    /// Partial overrides keyed by mode name ("development" / "production")
    #[serde(default)]
    pub profiles: IndexMap<String, Value>,
}

impl SiteConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use sitepack_config::SiteConfig;
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "site": { "title": "Docs" },
    ///     "dev": { "port": 4000 }
    /// });
    ///
    /// let config = SiteConfig::from_value(value).unwrap();
    /// assert_eq!(config.site.title, "Docs");
    /// assert_eq!(config.dev.unwrap().port, 4000);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Apply the `[profiles.<mode>]` overrides for `mode`.
    ///
    /// Tables merge key by key; scalars and arrays replace the base value.
    pub fn materialize_profile(mut self, mode: BuildMode) -> ConfigResult<Self> {
        let Some(overrides) = self.profiles.get(mode.as_str()).cloned() else {
            return Ok(self);
        };

        if overrides.is_null() {
            return Ok(self);
        }

        if !overrides.is_object() {
            return Err(ConfigError::InvalidProfileOverride {
                message: format!("profile '{mode}' must be a table"),
            });
        }

        tracing::debug!(profile = %mode, "applying profile overrides");

        let profiles = std::mem::take(&mut self.profiles);
        let mut base = serde_json::to_value(&self).map_err(|err| {
            ConfigError::InvalidProfileOverride {
                message: err.to_string(),
            }
        })?;
        merge_values(&mut base, &overrides);

        let mut merged: SiteConfig =
            serde_json::from_value(base).map_err(|err| ConfigError::InvalidProfileOverride {
                message: err.to_string(),
            })?;
        merged.profiles = profiles;
        Ok(merged)
    }
}

fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
