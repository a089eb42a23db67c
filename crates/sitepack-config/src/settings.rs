//! Global settings shared across profiles.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Default log filter when neither `--verbose`, `--quiet` nor `RUST_LOG` is given
    #[serde(default)]
    pub log_level: Option<String>,
}
