//! Configuration file reading and writing.
//!
//! Files may be JSON5 (comments and trailing commas allowed) or plain JSON.
//! Writing always produces pretty-printed JSON.
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./prodx.json5` or `./prodx.json`
//! 2. User: `<config dir>/prodx/config.json5` or `<config dir>/prodx/config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Local configuration file names, in priority order.
const CONFIG_FILE_NAMES: &[&str] = &["prodx.json5", "prodx.json"];

/// Directory name used under the platform config and data directories.
pub(crate) const APP_DIR: &str = "prodx";

/// User configuration file names, in priority order.
const USER_CONFIG_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the configuration file path.
///
/// Returns `Some(path)` for the first existing candidate, `None` when no
/// configuration file exists anywhere.
///
/// # Examples
///
/// ```no_run
/// use prodx_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let local = CONFIG_FILE_NAMES.iter().map(PathBuf::from);
    let user = dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .into_iter()
        .flat_map(|dir| USER_CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|path| path.exists())
}

/// Returns the user configuration directory, typically `~/.config/prodx/`.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the platform config directory
/// cannot be determined.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Returns the default user configuration file path.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the platform config directory
/// cannot be determined.
pub fn default_user_config_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join("config.json5"))
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be
/// parsed into `T`.
///
/// # Examples
///
/// ```no_run
/// use prodx_config::persistence::read_config_file;
/// use prodx_config::Config;
///
/// # fn main() -> prodx_config::Result<()> {
/// let config: Config = read_config_file("prodx.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    // JSON is a subset of JSON5
    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes a configuration to a file as pretty-printed JSON.
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, the value
/// cannot be serialized, or the file cannot be written.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let content = serde_json::to_string_pretty(config)?;

    std::fs::write(path, content).map_err(|source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}
