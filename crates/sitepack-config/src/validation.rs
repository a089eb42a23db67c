//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::error::{ConfigError, Result};
use crate::tasks::FilenameStrategy;

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate a project configuration
    fn validate(&self, config: &SiteConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use sitepack_config::{ConfigValidator, SchemaValidator, SiteConfig};
///
/// let config = SiteConfig::default();
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &SiteConfig) -> Result<()> {
        if config.paths.entries.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        for (name, path) in &config.paths.entries {
            if name.trim().is_empty() || path.as_os_str().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "entry names and paths cannot be empty".to_string(),
                    hint: Some("Give every entry under [paths.entries] a name and a path".to_string()),
                });
            }
        }

        if config.site.title.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "site title cannot be empty".to_string(),
                hint: Some("Set `title` under [site]".to_string()),
            });
        }

        let ext = &config.paths.template_extension;
        if ext.is_empty() || ext.starts_with('.') {
            return Err(ConfigError::SchemaValidation {
                message: format!("invalid template extension '{ext}'"),
                hint: Some("Use the bare extension, e.g. template_extension = \"html\"".to_string()),
            });
        }

        if let Some(dev) = &config.dev {
            if dev.port == 0 {
                return Err(ConfigError::SchemaValidation {
                    message: "dev server port cannot be 0".to_string(),
                    hint: Some("Pick a fixed port such as 3000".to_string()),
                });
            }
        }

        if let Some(transpile) = &config.transpile {
            if transpile.extensions.is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "transpile rule has no extensions".to_string(),
                    hint: Some("Remove [transpile] or list extensions such as [\"js\"]".to_string()),
                });
            }
        }

        // Templates are static today; parse them so a bad edit fails here, not mid-build
        for strategy in [FilenameStrategy::Named, FilenameStrategy::ContentHash] {
            strategy.script_template()?;
            strategy.stylesheet_template()?;
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs schema validation, then checks that the entry scripts and the favicon
/// exist under the project root. The pages directory is checked by discovery.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &SiteConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        for entry in config.paths.entries.values() {
            let path = self.root.join(entry);
            if !path.is_file() {
                return Err(ConfigError::EntryNotFound { path });
            }
        }

        let favicon = self.root.join(&config.site.favicon);
        if !favicon.is_file() {
            return Err(ConfigError::FaviconNotFound { path: favicon });
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &SiteConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &SiteConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
