//! Logging infrastructure for the sitepack CLI.
//!
//! Logs are written to stderr so that `sitepack plan` output on stdout stays
//! machine-readable.
//!
//! # Example
//!
//! ```rust,no_run
//! use sitepack_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Resolving plan");
//! debug!("Scanning pages in {}", "src/pages");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events are shown by default.
const CRATES: &[&str] = &["sitepack", "sitepack_cli", "sitepack_config"];

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at the start of the program, before any logging occurs.
///
/// # Verbosity Levels
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for sitepack crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for sitepack crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_default(verbose, quiet, no_color, None);
}

/// Like [`init_logger`], but with a project-provided default level.
///
/// `default_level` (from `[settings] log_level`) sits between `RUST_LOG`
/// and the built-in INFO default.
pub fn init_logger_with_default(
    verbose: bool,
    quiet: bool,
    no_color: bool,
    default_level: Option<&str>,
) {
    init_logger_with_filter(build_filter(verbose, quiet, default_level), no_color);
}

/// Initialize logger with custom environment filter.
///
/// # Example
///
/// ```rust,no_run
/// use sitepack_cli::logger::init_logger_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// let filter = EnvFilter::new("sitepack_config=trace");
/// init_logger_with_filter(filter, false);
/// ```
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn build_filter(verbose: bool, quiet: bool, default_level: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new(crate_directives("debug"));
    }
    if quiet {
        return EnvFilter::new(crate_directives("error"));
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    default_level
        .and_then(|level| EnvFilter::try_new(crate_directives(level.trim())).ok())
        .unwrap_or_else(|| EnvFilter::new(crate_directives("info")))
}

/// `sitepack=LEVEL,sitepack_cli=LEVEL,...`
fn crate_directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|name| format!("{name}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Check if colored output should be enabled.
///
/// # Environment Variables
///
/// - `NO_COLOR`: If set, disables colors
/// - `FORCE_COLOR`: If set, forces colors even in non-TTY
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}
