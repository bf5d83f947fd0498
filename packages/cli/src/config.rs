use anyhow::{bail, Result};
use linepad_editor::DEFAULT_HISTORY_CAPACITY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "linepad.config.json";

/// Linepad configuration file format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Undo (and redo) depth
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Open a missing input file as an empty document instead of failing
    #[serde(default)]
    pub create_missing: bool,
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str(&content)?
        } else {
            // Return default config if none exists
            Config::default()
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.history_capacity == 0 {
            bail!("historyCapacity must be at least 1");
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
            create_missing: false,
        }
    }
}
