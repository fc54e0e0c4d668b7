//! Simulator configuration.
//!
//! A small TOML file tunes the session: starting balance, price tick
//! cadence, chart depth, and an optional RNG seed for reproducible runs.
//! Every field has a default, and a missing file means "all defaults".

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Session tuning knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Cash the account starts with.
    pub starting_balance: f64,
    /// Seconds between price feed ticks.
    pub tick_interval_secs: u64,
    /// Days of synthetic history behind the price chart.
    pub history_days: u32,
    /// Fixed RNG seed; omit for a different walk every session.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            starting_balance: crate::domain::STARTING_BALANCE,
            tick_interval_secs: 5,
            history_days: 30,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a file; a missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SimConfig::default();
        assert_eq!(config.starting_balance, 10_000.0);
        assert_eq!(config.tick_interval_secs, 5);
        assert_eq!(config.history_days, 30);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = SimConfig::from_toml("starting_balance = 25000.0\nseed = 42\n").unwrap();
        assert_eq!(config.starting_balance, 25_000.0);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.tick_interval_secs, 5);
    }

    #[test]
    fn missing_file_is_defaults() {
        let config = SimConfig::from_file(Path::new("/nonexistent/papertrade.toml")).unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(SimConfig::from_toml("starting_balance = \"lots\"").is_err());
    }
}
