//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the prodx application.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::countdown::CountdownConfig;
use crate::error::Result;
use crate::logging::LoggingConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// The main configuration struct for the prodx application.
///
/// Every section is optional in the file; missing sections and fields take
/// their defaults.
///
/// # Examples
///
/// ```
/// use prodx_config::{Config, CountdownConfig};
///
/// let config = Config::default();
/// assert_eq!(config.countdown.tick_interval_ms, 1000);
///
/// let config = Config {
///     countdown: CountdownConfig {
///         tick_interval_ms: 250,
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Countdown refresh and progress settings.
    #[serde(default)]
    pub countdown: CountdownConfig,

    /// Log destination and verbosity.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Returns the default configuration when no file is found.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading configuration");
                Self::load_from(path)
            }
            None => {
                tracing::debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from `path` when given, otherwise from the
    /// default file locations.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected file cannot be read, parsed, or
    /// validated. An explicit path that does not exist is an error.
    pub fn load_or_find(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use prodx_config::Config;
    ///
    /// # fn example() -> prodx_config::Result<()> {
    /// let config = Config::load_from("prodx.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use prodx_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.countdown.tick_interval_ms = 10; // Below minimum
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.countdown.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodx_protocol::WindowMode;
    use tempfile::TempDir;

    use crate::ConfigError;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config, Config::new());
        assert_eq!(config.countdown, CountdownConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_countdown() {
        let config = Config {
            countdown: CountdownConfig {
                window_days: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCountdown { .. })
        ));
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialize_partial() {
        let json = r#"{"countdown": {"window": "fixed"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.countdown.window, WindowMode::Fixed);
        assert_eq!(config.countdown.tick_interval_ms, 1000);
        assert_eq!(config.logging.filter, "prodx=info");
    }

    #[test]
    fn load_from_json5_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prodx.json5");
        std::fs::write(
            &path,
            r#"
            {
                countdown: {
                    tick_interval_ms: 500,
                    window_days: 14,
                    warning_threshold: 25.0,
                },
                logging: { filter: "prodx=debug" },
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.countdown.tick_interval_ms, 500);
        assert_eq!(config.countdown.window_days, 14);
        assert_eq!(config.countdown.warning_threshold, 25.0);
        assert_eq!(config.logging.filter, "prodx=debug");
    }

    #[test]
    fn load_from_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prodx.json");
        std::fs::write(&path, r#"{"countdown": {"warning_threshold": 150}}"#).unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidCountdown { .. })
        ));
    }

    #[test]
    fn load_or_find_prefers_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.json");
        std::fs::write(&path, r#"{"countdown": {"tick_interval_ms": 2000}}"#).unwrap();

        let config = Config::load_or_find(Some(&path)).unwrap();
        assert_eq!(config.countdown.tick_interval_ms, 2000);

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            Config::load_or_find(Some(&missing)),
            Err(ConfigError::ReadFile { .. })
        ));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let original = Config {
            countdown: CountdownConfig {
                tick_interval_ms: 750,
                window: WindowMode::Fixed,
                window_days: 30,
                warning_threshold: 10.0,
            },
            logging: LoggingConfig {
                filter: "prodx_tui=trace".to_string(),
                file: Some(dir.path().join("prodx.log")),
            },
        };

        original.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(original, loaded);
    }
}
