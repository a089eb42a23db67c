//! Development server configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::SiteConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevServerConfig {
    /// Directory served as-is during development
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Push updated modules to connected browsers
    #[serde(default = "default_true")]
    pub hot: bool,

    #[serde(default = "default_true")]
    pub compress: bool,

    /// Serve the index page for unknown routes (client-side routing)
    #[serde(default = "default_true")]
    pub history_api_fallback: bool,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            static_dir: default_static_dir(),
            host: default_host(),
            port: default_port(),
            hot: true,
            compress: true,
            history_api_fallback: true,
        }
    }
}

impl DevServerConfig {
    /// Address the dev server binds to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.address())
    }
}

/// Dev-server settings for a project.
///
/// Every field is fixed by default; the `[dev]` section may override them.
pub fn assemble_dev_server_config(config: &SiteConfig) -> DevServerConfig {
    let dev = config.dev.clone().unwrap_or_default();
    tracing::debug!(address = %dev.address(), hot = dev.hot, "assembled dev server config");
    dev
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("src")
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    3000
}

fn default_true() -> bool {
    true
}
