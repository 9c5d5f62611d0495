//! Configuration management for strikegate.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub access: AccessConfig,
    pub strike: StrikeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Ceiling on any single requested unlock window, in seconds.
    pub max_unlock_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrikeConfig {
    /// BCM pin number driving the strike relay.
    pub gpio_pin: u8,
}

impl AccessConfig {
    /// The configured ceiling as a [`Duration`].
    pub fn max_unlock(&self) -> Duration {
        Duration::from_secs(self.max_unlock_secs)
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// Returns [`Error::Io`] when the file cannot be read and
    /// [`Error::Config`] when it does not parse as a valid configuration.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content).map_err(|err| Error::Config(err.to_string()))?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            access: AccessConfig {
                max_unlock_secs: 30,
            },
            strike: StrikeConfig { gpio_pin: 21 },
        }
    }
}
