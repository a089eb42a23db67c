//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use miette::Report;
use sitepack_config::{ConfigError, DiscoveryError};

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::FileNotFound(path) => miette::miette!(
            help = "Check the path or pass --root",
            "File not found: {}",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}

/// Convert a resolver error to miette Report, keeping its hint as help text
pub fn config_error_to_miette(err: ConfigError) -> Report {
    let code = error_code(&err);
    match err.hint().map(str::to_string) {
        Some(help) => miette::miette!(code = code, help = help, "{}", err),
        None => miette::miette!(code = code, "{}", err),
    }
}

fn error_code(err: &ConfigError) -> &'static str {
    match err {
        ConfigError::Discovery(DiscoveryError::Missing { .. }) => "sitepack::pages::missing",
        ConfigError::Discovery(DiscoveryError::NotADirectory { .. }) => {
            "sitepack::pages::not_a_directory"
        }
        ConfigError::Discovery(DiscoveryError::Unreadable { .. }) => "sitepack::pages::unreadable",
        ConfigError::EntryNotFound { .. } => "sitepack::entry_not_found",
        ConfigError::FaviconNotFound { .. } => "sitepack::favicon_not_found",
        ConfigError::NotFound => "sitepack::config::not_found",
        ConfigError::InvalidValue { .. } => "sitepack::config::invalid_value",
        ConfigError::InvalidProfileOverride { .. } => "sitepack::config::profile",
        ConfigError::InvalidTemplate { .. } => "sitepack::config::template",
        ConfigError::NoEntries | ConfigError::SchemaValidation { .. } => "sitepack::config::schema",
        ConfigError::Io(_) => "sitepack::io",
    }
}
