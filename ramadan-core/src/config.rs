//! Optional user configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use crate::error::{ConvertError, ConvertResult};

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_FILE)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

/// Configuration at ~/.config/ramadan-cal/config.toml
///
/// Only the standalone converter reads it, to pick default file names.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ConverterConfig {
    #[serde(default = "default_input")]
    pub default_input: PathBuf,

    #[serde(default = "default_output")]
    pub default_output: PathBuf,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        ConverterConfig {
            default_input: default_input(),
            default_output: default_output(),
        }
    }
}

impl ConverterConfig {
    pub fn config_path() -> ConvertResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConvertError::Config("Could not determine config directory".into()))?
            .join("ramadan-cal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when no file exists.
    pub fn load() -> ConvertResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> ConvertResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ConvertError::Config(e.to_string()))
    }
}
