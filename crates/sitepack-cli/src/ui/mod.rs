//! Terminal status messages.
//!
//! Every message goes to stderr; stdout is reserved for command output such
//! as the serialized plan.
//!
//! # Examples
//!
//! ```no_run
//! use sitepack_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Configuration is valid!");
//! ui::warning("No page templates found");
//! ```

mod messages;

pub use messages::{error, info, success, warning};

use std::sync::atomic::{AtomicBool, Ordering};

static COLORS: AtomicBool = AtomicBool::new(false);

/// Check if running in a CI environment.
///
/// Detects common CI environment variables from GitHub Actions, GitLab CI,
/// CircleCI, and Travis CI.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
}

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR, otherwise colors only when stderr is
/// attended and not running under CI.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr() && !is_ci()
}

/// Initialize color support based on environment and `--no-color`.
///
/// Call early in `main`, before the first message. Until then messages are
/// printed without colors.
pub fn init_colors(no_color: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}
