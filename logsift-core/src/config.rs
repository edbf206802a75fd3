use crate::error::SiftError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Root under which `<stem>_logs/` is created. Current directory when unset.
    pub directory: Option<PathBuf>,
    /// Print per-entry lines in the console report.
    pub print_entries: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            print_entries: true,
        }
    }
}

impl Config {
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("logsift").join("config.toml"))
    }

    /// Loads the user config file if there is one, defaults otherwise.
    pub fn load() -> Result<Self, SiftError> {
        match Self::get_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Loads an explicitly requested config file. A missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self, SiftError> {
        debug!("Loading config from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| SiftError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(path, &content)
    }

    pub fn parse(path: &Path, content: &str) -> Result<Self, SiftError> {
        toml::from_str(content).map_err(|e| SiftError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn output_root(&self) -> PathBuf {
        self.output.directory.clone().unwrap_or_default()
    }
}
