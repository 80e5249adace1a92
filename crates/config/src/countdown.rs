//! Countdown timer configuration.
//!
//! Controls how often each card's countdown refreshes, which reference
//! window its progress bar is measured against, and where the warning
//! band starts.

use std::time::Duration;

use chrono::TimeDelta;
use prodx_protocol::countdown::{
    DEFAULT_WARNING_THRESHOLD, DEFAULT_WINDOW_DAYS, ReferenceWindow, WindowMode,
};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default countdown refresh interval (1 second).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// Minimum allowed refresh interval.
pub const MIN_TICK_INTERVAL_MS: u64 = 100;

/// Maximum allowed refresh interval (1 minute).
pub const MAX_TICK_INTERVAL_MS: u64 = 60_000;

/// Minimum reference window span, in days.
pub const MIN_WINDOW_DAYS: u32 = 1;

/// Maximum reference window span, in days.
pub const MAX_WINDOW_DAYS: u32 = 365;

/// Configuration for the per-card countdowns.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use prodx_config::CountdownConfig;
///
/// let config = CountdownConfig::default();
/// assert_eq!(config.tick_interval(), Duration::from_secs(1));
/// assert_eq!(config.window_days, 7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountdownConfig {
    /// How often each visible card recomputes its countdown, in milliseconds.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,

    /// How the progress window relates to the remaining time.
    #[serde(default)]
    pub window: WindowMode,

    /// Span of the progress window, in days.
    #[serde(default = "default_window_days")]
    pub window_days: u32,

    /// Progress percentage below which a countdown shows as urgent.
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold: f64,
}

fn default_tick_interval() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

fn default_warning_threshold() -> f64 {
    DEFAULT_WARNING_THRESHOLD
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            window: WindowMode::default(),
            window_days: DEFAULT_WINDOW_DAYS,
            warning_threshold: DEFAULT_WARNING_THRESHOLD,
        }
    }
}

impl CountdownConfig {
    /// Returns the refresh interval as a [`Duration`].
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Returns the reference window described by this configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::TimeDelta;
    /// use prodx_config::CountdownConfig;
    /// use prodx_protocol::WindowMode;
    ///
    /// let config = CountdownConfig {
    ///     window: WindowMode::Fixed,
    ///     window_days: 14,
    ///     ..Default::default()
    /// };
    /// let window = config.reference_window();
    /// assert_eq!(window.mode, WindowMode::Fixed);
    /// assert_eq!(window.span, TimeDelta::days(14));
    /// ```
    #[must_use]
    pub fn reference_window(&self) -> ReferenceWindow {
        ReferenceWindow {
            mode: self.window,
            span: TimeDelta::days(i64::from(self.window_days)),
        }
    }

    /// Validates the countdown settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCountdown`] if the tick interval, window
    /// span, or warning threshold is out of range.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&self.tick_interval_ms) {
            return Err(ConfigError::InvalidCountdown {
                reason: format!(
                    "tick interval {} ms is outside {}..={} ms",
                    self.tick_interval_ms, MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS
                ),
            });
        }

        if !(MIN_WINDOW_DAYS..=MAX_WINDOW_DAYS).contains(&self.window_days) {
            return Err(ConfigError::InvalidCountdown {
                reason: format!(
                    "window of {} days is outside {}..={} days",
                    self.window_days, MIN_WINDOW_DAYS, MAX_WINDOW_DAYS
                ),
            });
        }

        if !(0.0..=100.0).contains(&self.warning_threshold) {
            return Err(ConfigError::InvalidCountdown {
                reason: format!(
                    "warning threshold {} is outside 0..=100",
                    self.warning_threshold
                ),
            });
        }

        Ok(())
    }
}
