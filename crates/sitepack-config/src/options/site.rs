use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::options::helpers::{default_favicon, default_title};

/// Values stamped into every generated page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteOptions {
    /// Document title
    #[serde(default = "default_title")]
    pub title: String,

    /// Favicon copied next to the pages and linked from each one
    #[serde(default = "default_favicon")]
    pub favicon: PathBuf,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            title: default_title(),
            favicon: default_favicon(),
        }
    }
}
