//! File-based config discovery for CLI use
//!
//! Handles finding and loading sitepack project files from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::SiteConfig;
use crate::error::{ConfigError, Result};
use crate::mode::BuildMode;

/// Name of the project file looked up in the root directory.
pub const CONFIG_FILE_NAME: &str = "sitepack.toml";

/// Key holding the configuration inside `package.json`.
const PACKAGE_JSON_KEY: &str = "sitepack";

/// File-based configuration discovery
///
/// Searches for sitepack project files in conventional locations and loads them.
/// Library users can build a `SiteConfig` directly or via `SiteConfig::from_value()`.
///
/// # Example
///
/// ```no_run
/// use sitepack_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: sitepack.toml
    /// 2. package.json (sitepack field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE_NAME);
        if toml_path.is_file() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.is_file() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get(PACKAGE_JSON_KEY).is_some_and(|v| !v.is_null()) {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load config from discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<SiteConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        self.load_from(&path)
    }

    /// Load the discovered config, or the built-in defaults when none exists.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(&self) -> Result<SiteConfig> {
        match self.find() {
            Some(path) => self.load_from(&path),
            None => {
                tracing::debug!(root = %self.root.display(), "no project file found, using defaults");
                Ok(SiteConfig::default())
            }
        }
    }

    /// Load config (or defaults) with the profile for `mode` merged in
    pub fn load_for_mode(&self, mode: BuildMode) -> Result<SiteConfig> {
        self.load_or_default()?.materialize_profile(mode)
    }

    /// Load config from a specific file path
    pub fn load_from(&self, path: &Path) -> Result<SiteConfig> {
        tracing::debug!(path = %path.display(), "loading project file");

        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            return self.load_from_package_json(path);
        }

        let content = fs::read_to_string(path)?;

        let toml_val: toml::Value =
            toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "toml".to_string(),
                hint: Some(format!("Invalid TOML syntax: {}", e)),
            })?;

        let value = serde_json::to_value(toml_val).map_err(|e| ConfigError::InvalidValue {
            field: "toml".to_string(),
            hint: Some(format!("TOML to JSON conversion failed: {}", e)),
        })?;

        SiteConfig::from_value(value)
    }

    fn load_from_package_json(&self, path: &Path) -> Result<SiteConfig> {
        let content = fs::read_to_string(path)?;

        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "package.json".to_string(),
                hint: Some(format!("Invalid JSON: {}", e)),
            })?;

        let value = parsed
            .get(PACKAGE_JSON_KEY)
            .filter(|v| !v.is_null())
            .ok_or_else(|| ConfigError::InvalidValue {
                field: PACKAGE_JSON_KEY.to_string(),
                hint: Some("Add a 'sitepack' object to your package.json".to_string()),
            })?;

        SiteConfig::from_value(value.clone())
    }
}
