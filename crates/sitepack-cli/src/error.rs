//! Error handling for the sitepack CLI.
//!
//! `CliError` wraps the resolver's [`sitepack_config::ConfigError`] and adds
//! the failures only the CLI can hit: bad arguments, output serialization,
//! and scaffolding I/O.
//!
//! # Example
//!
//! ```rust,no_run
//! use sitepack_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_template(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_path(path)
//!         .with_hint("Run `sitepack init` to create the default pages")
//! }
//! ```

mod diagnostic;

use std::path::PathBuf;
use thiserror::Error;

pub use diagnostic::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Project loading, discovery or validation failed
    #[error("Configuration error: {0}")]
    Config(#[from] sitepack_config::ConfigError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Plan could not be rendered as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Plan or scaffold could not be rendered as TOML
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

impl From<sitepack_config::DiscoveryError> for CliError {
    fn from(err: sitepack_config::DiscoveryError) -> Self {
        Self::Config(err.into())
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error message.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use sitepack_cli::error::{Result, ResultExt, CliError};
    /// # fn run() -> Result<()> {
    /// fn operation() -> Result<()> {
    ///     Err(CliError::Custom("something went wrong".into()))
    /// }
    /// operation()
    ///     .context("Failed to scaffold project")?;
    /// # Ok(())
    /// # }
    /// ```
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitepack_config::{ConfigError, DiscoveryError};

    #[test]
    fn test_cli_error_from_config_error() {
        let cli_err: CliError = ConfigError::NotFound.into();
        assert!(matches!(cli_err, CliError::Config(_)));
        assert_eq!(cli_err.to_string(), "Configuration error: config not found");
    }

    #[test]
    fn test_cli_error_from_discovery_error() {
        let cli_err: CliError = DiscoveryError::Missing {
            path: PathBuf::from("src/pages"),
        }
        .into();
        assert!(matches!(
            cli_err,
            CliError::Config(ConfigError::Discovery(DiscoveryError::Missing { .. }))
        ));
        assert!(cli_err.to_string().contains("src/pages"));
    }

    #[test]
    fn test_result_ext_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let err = result.with_path("/test/index.html").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_result_ext_with_path_keeps_other_errors() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        let err = result.with_path("/test/index.html").unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn test_result_ext_with_hint() {
        let result: std::result::Result<(), ConfigError> = Err(ConfigError::NoEntries);

        let err = result.with_hint("Add [paths.entries]").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("no script entries"));
        assert!(msg.contains("Hint: Add [paths.entries]"));
    }

    #[test]
    fn test_result_ext_context() {
        let result: std::result::Result<(), ConfigError> = Err(ConfigError::NotFound);

        let err = result.context("Failed to load project").unwrap_err();
        assert!(err.to_string().starts_with("Failed to load project: "));
    }
}
