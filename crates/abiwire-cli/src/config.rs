//! CLI configuration management

use abiwire_codec::DecoderConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::CliError;

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Prefix hex output with `0x`
    #[serde(default = "default_prefix_output")]
    pub prefix_output: bool,
    /// Decoder settings
    #[serde(default)]
    pub decoder: DecoderConfig,
}

fn default_prefix_output() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix_output: default_prefix_output(),
            decoder: DecoderConfig::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".abiwire"))
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Load config from the default location, or return defaults
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| Self::load_from(&path).ok())
            .unwrap_or_default()
    }

    /// Load config from a file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, CliError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), CliError> {
        let path = Self::config_path()
            .ok_or_else(|| CliError::Config("Cannot determine config path".to_string()))?;
        self.save_to(&path)
    }

    /// Save config to a file
    pub fn save_to(&self, path: &Path) -> Result<(), CliError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Render hex data according to `prefix_output`
    pub fn format_hex(&self, data: &[u8]) -> String {
        if self.prefix_output {
            format!("0x{}", hex::encode(data))
        } else {
            hex::encode(data)
        }
    }
}
