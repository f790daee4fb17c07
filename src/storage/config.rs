//! Configuration handling for the recipe catalog
//!
//! Configuration is stored in `~/.config/recipe-share/config.toml` (or the
//! platform equivalent). `RECIPES_CONFIG` points at an alternative file.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "RECIPES_CONFIG";

/// Default number of list calls made by `bench`
pub const DEFAULT_BENCH_ITERATIONS: u32 = 500;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Failed to write configuration {path}: {message}")]
    Write { path: PathBuf, message: String },
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FormatPreference {
    #[default]
    Text,
    Json,
}

/// User configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format (text or json)
    pub default_format: FormatPreference,

    /// Load seed recipes into an empty catalog at startup
    pub seed: bool,

    /// JSONL file replacing the built-in seed recipes
    pub seed_file: Option<PathBuf>,

    /// Iterations for `bench` when none are given
    pub bench_iterations: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: FormatPreference::Text,
            seed: true,
            seed_file: None,
            bench_iterations: DEFAULT_BENCH_ITERATIONS,
        }
    }
}

impl Config {
    /// Loads configuration from `RECIPES_CONFIG` or the default location
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Returns the config file that `load` reads
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        Self::global_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "recipe-share", "recipe-share")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Writes the configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        fs::write(path, content).map_err(|e| ConfigError::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
