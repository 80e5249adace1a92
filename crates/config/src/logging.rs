//! Logging configuration.
//!
//! The terminal is owned by the dashboard, so logs go to a file. The filter
//! string uses `tracing-subscriber`'s `EnvFilter` directive syntax; the
//! `RUST_LOG` environment variable takes precedence over it at startup.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::persistence::APP_DIR;

/// Default log filter directive.
pub const DEFAULT_LOG_FILTER: &str = "prodx=info";

/// Default log file name inside the data directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "prodx.log";

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `"prodx=debug"`.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Explicit log file path. Defaults to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Resolves the log file path, falling back to
    /// `<data local dir>/prodx/prodx.log`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoHomeDirectory`] when no explicit file is set
    /// and the platform data directory cannot be determined.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use prodx_config::LoggingConfig;
    ///
    /// let config = LoggingConfig {
    ///     file: Some(PathBuf::from("/tmp/prodx-debug.log")),
    ///     ..Default::default()
    /// };
    /// assert_eq!(config.log_file().unwrap(), PathBuf::from("/tmp/prodx-debug.log"));
    /// ```
    pub fn log_file(&self) -> Result<PathBuf> {
        if let Some(file) = &self.file {
            return Ok(file.clone());
        }
        dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR).join(DEFAULT_LOG_FILE_NAME))
            .ok_or(ConfigError::NoHomeDirectory)
    }
}
