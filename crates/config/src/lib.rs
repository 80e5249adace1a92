//! Configuration management for the prodx application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from files with built-in defaults for everything.
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`countdown`]: Countdown refresh interval, progress window, and warning threshold
//! - [`logging`]: Log file location and filter
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. An explicit path (`--config` or `PRODX_CONFIG`)
//! 2. Local config (`./prodx.json5` or `./prodx.json`)
//! 3. User config (`~/.config/prodx/config.json5` or `~/.config/prodx/config.json`)
//! 4. Built-in defaults
//!
//! # Example File
//!
//! ```json5
//! {
//!   countdown: {
//!     tick_interval_ms: 1000,
//!     // "trailing": progress is measured against remaining time plus the window
//!     // "fixed": progress is measured against the window alone
//!     window: "trailing",
//!     window_days: 7,
//!     warning_threshold: 20,
//!   },
//!   logging: { filter: "prodx=info" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use prodx_config::Config;
//!
//! # fn example() -> prodx_config::Result<()> {
//! let config = Config::load()?;
//! println!("Refresh every {:?}", config.countdown.tick_interval());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod countdown;
pub mod error;
pub mod logging;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use countdown::CountdownConfig;
pub use error::{ConfigError, Result};
pub use logging::LoggingConfig;
