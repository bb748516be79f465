//! Application configuration.
//!
//! The configuration is loaded from a JSON file.  The top-level schema uses a
//! `"navigation"` key so the file can be extended with additional sections
//! later without breaking backward compatibility.
//!
//! # Example
//!
//! ```json
//! {
//!   "navigation": {
//!     "cycle": true,
//!     "right_to_left": false
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
///
/// Every field is optional — a minimal `{}` file is valid and all sections
/// fall back to their compiled-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Keyboard navigation settings.
    #[serde(default)]
    pub navigation: NavigationConfig,
}

/// Keyboard navigation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Wrap through clear all / add desk when leaving the grid.  When
    /// `false`, presses at the edge keep the selection in place.
    /// Default: `true`.
    pub cycle: bool,
    /// The switcher is laid out right-to-left, so the arrow keys swap
    /// roles.  Default: `false`.
    pub right_to_left: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            cycle: true,
            right_to_left: false,
        }
    }
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
