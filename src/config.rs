use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GeoNotesError, Result};

/// Settings for the command-line harness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Count used by "latest notes" when the prompt is left blank
    pub latest_default: usize,
    /// Print the welcome banner on startup
    pub banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            latest_default: 5,
            banner: true,
        }
    }
}

impl Config {
    /// Load from a JSON file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path).map_err(|e| {
            GeoNotesError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}
