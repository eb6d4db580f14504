use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/counter-app/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("counter-app").join("config.toml")
    }

    /// Loads and validates configuration from the default config file.
    ///
    /// If the file doesn't exist, returns `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::read()?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// A missing file is an error here: the caller asked for this path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read_from(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`Config::load`] without validation, for callers that apply
    /// overrides first.
    pub fn read() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::read_from(&path)
    }

    /// Like [`Config::load_from`] without validation.
    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `min <= max`, and start and jackpot lie within `[min, max]`
    /// - The tick rate is non-zero
    /// - The celebration has at least one particle and one tick
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.counter
            .initial_state()
            .map_err(|e| ConfigError::ValidationError {
                message: e.to_string(),
            })?;

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        if self.celebration.particles == 0 || self.celebration.duration_ticks == 0 {
            return Err(ConfigError::ValidationError {
                message: "celebration.particles and celebration.duration_ticks must be greater than zero"
                    .to_string(),
            });
        }

        Ok(())
    }
}
