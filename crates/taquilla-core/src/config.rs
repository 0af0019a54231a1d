//! Configuration for taquilla
//!
//! Optional TOML file passed with `--config`. Only startup knobs live here;
//! ticket state itself is never written to disk.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// taquilla configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// First identifier value minted by the repository
    pub seed: u32,

    /// Use colors in console output
    pub colors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: crate::id::DEFAULT_SEED,
            colors: true,
        }
    }
}

impl Config {
    /// Load config from a TOML file, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }
}
