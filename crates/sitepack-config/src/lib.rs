//! Build plan resolution for multi-page front-end projects.
//!
//! A project is a source tree (page templates, scripts, styles, static
//! assets) plus an optional `sitepack.toml`. Resolution turns it into a
//! [`BuildPlan`]: one HTML output task per page template, ordered asset rules,
//! an optimization policy and dev-server settings. The plan is an immutable
//! value handed to an external build engine.
//!
//! ```no_run
//! use sitepack_config::{BuildPlan, ConfigDiscovery, resolve_mode};
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let mode = resolve_mode();
//! let config = ConfigDiscovery::new(root).load_for_mode(mode)?;
//! let plan = BuildPlan::resolve(root, &config, mode)?;
//! println!("{} pages", plan.pages.len());
//! # Ok::<(), sitepack_config::ConfigError>(())
//! ```

pub mod config;
pub mod dev;
pub mod discovery;
pub mod error;
pub mod filename;
pub mod mode;
pub mod optimization;
pub mod options;
pub mod pages;
pub mod plan;
pub mod rules;
pub mod settings;
pub mod tasks;
pub mod validation;

// Re-export main types
pub use config::*;
pub use dev::*;
pub use error::*;
pub use filename::{FileContext, FilenameTemplate, content_digest};
pub use mode::*;
pub use optimization::*;
pub use options::*;
pub use pages::*;
pub use plan::*;
pub use rules::*;
pub use settings::*;
pub use tasks::*;

// Re-export discovery and validation
pub use discovery::{CONFIG_FILE_NAME, ConfigDiscovery};
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
