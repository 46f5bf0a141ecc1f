//! Application configuration.
//!
//! The configuration is loaded from a JSON file at
//! `$XDG_CONFIG_HOME/ksw/config.json`.  The file is optional — ksw runs
//! with compiled-in defaults when it is missing.
//!
//! # Example
//!
//! ```json
//! {
//!   "mode": "lockstep",
//!   "require_uniform_layouts": false
//! }
//! ```

use crate::cycler::CycleMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
///
/// Every field is optional — a minimal `{}` file is valid and all fields
/// fall back to their compiled-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// How the next layout index is computed across keyboards:
    /// `"lockstep"` (default) or `"per-device"`.
    #[serde(default)]
    pub mode: CycleMode,

    /// Refuse to switch unless every keyboard reports the same
    /// layout-name list as the reference device.
    ///
    /// Off by default, matching the historical behaviour of blindly
    /// applying the reference device's index everywhere.
    #[serde(default)]
    pub require_uniform_layouts: bool,
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
