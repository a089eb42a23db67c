//! Error types for configuration loading, page discovery and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Failure to scan the page template directory.
///
/// Always fatal: resolution aborts before any output is produced.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("pages directory does not exist: {}", .path.display())]
    Missing { path: PathBuf },

    #[error("pages path is not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("pages directory is not readable: {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DiscoveryError {
    /// The directory the scan was pointed at.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Missing { path } | Self::NotADirectory { path } | Self::Unreadable { path, .. } => {
                path
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    // Filesystem validation errors (for CLI use)
    #[error("entry script not found: {}", .path.display())]
    EntryNotFound { path: PathBuf },

    #[error("favicon not found: {}", .path.display())]
    FaviconNotFound { path: PathBuf },

    // Config parsing/loading errors
    #[error("config not found")]
    NotFound,

    #[error("invalid config value for '{field}'{}", .hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    #[error("invalid profile override: {message}")]
    InvalidProfileOverride { message: String },

    #[error("invalid filename template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },

    // Schema validation errors (no filesystem checks)
    #[error("no script entries specified")]
    NoEntries,

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Optional remediation hint for the user.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::SchemaValidation { hint, .. } | Self::InvalidValue { hint, .. } => {
                hint.as_deref()
            }
            Self::NotFound => Some("Create a sitepack.toml file or run `sitepack init`"),
            Self::Discovery(DiscoveryError::Missing { .. }) => {
                Some("Check `paths.pages` in sitepack.toml or pass --root")
            }
            _ => None,
        }
    }
}
