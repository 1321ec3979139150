//! Configuration management
//!
//! Locates the progress document and the per-module documentation tree.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Progress document, relative paths resolve against the working directory
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Root of the per-module documentation tree
    #[serde(default = "default_modules_dir")]
    pub modules_dir: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("learning_progress.json")
}

fn default_modules_dir() -> PathBuf {
    PathBuf::from("modules")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            modules_dir: default_modules_dir(),
        }
    }
}

impl Config {
    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    /// Load configuration from a specific file, falling back to defaults
    /// when the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

/// Get the configuration file path
pub fn config_path() -> Result<PathBuf> {
    let base = directories::ProjectDirs::from("com", "study-tracker", "study-tracker")
        .context("Failed to get project directories")?;
    Ok(base.config_dir().join("config.toml"))
}
