//! Remaining-time calculation for task deadlines.
//!
//! A [`Countdown`] is a pure function of a deadline and the current time.
//! Live views recompute it on a fixed tick; nothing here keeps time itself.
//!
//! # Progress percentage
//!
//! The percentage expresses the remaining time as a share of a
//! [`ReferenceWindow`]:
//!
//! | Mode | Window |
//! |------|--------|
//! | [`WindowMode::Trailing`] (default) | remaining time + span |
//! | [`WindowMode::Fixed`] | span |
//!
//! The span defaults to seven days. With a trailing window the "full bar"
//! moves with the deadline, so the percentage only approaches 100 for far
//! deadlines; the fixed window keeps a constant scale.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

const MS_PER_SECOND: u64 = 1000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Default span of the reference window, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Percentage below which a running countdown is considered urgent.
pub const DEFAULT_WARNING_THRESHOLD: f64 = 20.0;

/// How the reference window for the progress percentage is built.
///
/// With the default seven-day span and 20% warning threshold, `Trailing`
/// turns a card yellow below 1.75 days remaining and `Fixed` below 1.4
/// days. `Fixed` is the window of a bar that ignores elapsed time
/// entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    /// Window is the remaining time plus the span.
    #[default]
    Trailing,
    /// Window is the span alone, a constant week by default.
    Fixed,
}

/// The duration the progress percentage is measured against.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use prodx_protocol::countdown::{ReferenceWindow, WindowMode};
///
/// let window = ReferenceWindow::default();
/// assert_eq!(window.mode, WindowMode::Trailing);
/// assert_eq!(window.span, TimeDelta::days(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceWindow {
    /// How the window relates to the remaining time.
    pub mode: WindowMode,
    /// The constant part of the window.
    pub span: TimeDelta,
}

impl Default for ReferenceWindow {
    fn default() -> Self {
        Self::trailing(TimeDelta::days(i64::from(DEFAULT_WINDOW_DAYS)))
    }
}

impl ReferenceWindow {
    /// Creates a window of `remaining + span`.
    #[must_use]
    pub const fn trailing(span: TimeDelta) -> Self {
        Self {
            mode: WindowMode::Trailing,
            span,
        }
    }

    /// Creates a window of exactly `span`.
    #[must_use]
    pub const fn fixed(span: TimeDelta) -> Self {
        Self {
            mode: WindowMode::Fixed,
            span,
        }
    }

    /// Returns the window length in milliseconds for the given remaining time.
    fn total_ms(self, remaining_ms: i64) -> i64 {
        let span_ms = self.span.num_milliseconds();
        match self.mode {
            WindowMode::Trailing => remaining_ms.saturating_add(span_ms),
            WindowMode::Fixed => span_ms,
        }
    }
}

/// Urgency band of a countdown, used to pick its display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Urgency {
    /// Plenty of time left.
    Normal,
    /// The percentage dropped below the warning threshold.
    Warning,
    /// The deadline has passed.
    Expired,
}

/// Time remaining until a deadline.
///
/// # Examples
///
/// ```
/// use chrono::{TimeDelta, Utc};
/// use prodx_protocol::Countdown;
///
/// let now = Utc::now();
/// let deadline = now + TimeDelta::milliseconds(90_061_000);
///
/// let countdown = Countdown::between(deadline, now);
/// let units = (countdown.days, countdown.hours, countdown.minutes, countdown.seconds);
/// assert_eq!(units, (1, 1, 1, 1));
/// assert!(!countdown.is_expired);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    /// Whole days remaining.
    pub days: u64,
    /// Hours within the day (0-23).
    pub hours: u8,
    /// Minutes within the hour (0-59).
    pub minutes: u8,
    /// Seconds within the minute (0-59).
    pub seconds: u8,
    /// Whether the deadline has been reached.
    pub is_expired: bool,
    /// Remaining time as a share of the reference window, in `[0, 100]`.
    pub percentage: f64,
}

impl Countdown {
    /// The countdown of a deadline that has passed.
    pub const EXPIRED: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        is_expired: true,
        percentage: 0.0,
    };

    /// Computes the countdown using the default reference window.
    #[must_use]
    pub fn between(deadline: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::with_window(deadline, now, ReferenceWindow::default())
    }

    /// Computes the countdown against an explicit reference window.
    ///
    /// A deadline at or before `now` yields [`Countdown::EXPIRED`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeDelta, Utc};
    /// use prodx_protocol::Countdown;
    /// use prodx_protocol::countdown::ReferenceWindow;
    ///
    /// let now = Utc::now();
    /// let window = ReferenceWindow::fixed(TimeDelta::days(7));
    ///
    /// let half = Countdown::with_window(now + TimeDelta::hours(84), now, window);
    /// assert_eq!(half.percentage, 50.0);
    ///
    /// let late = Countdown::with_window(now, now, window);
    /// assert!(late.is_expired);
    /// ```
    #[must_use]
    pub fn with_window(
        deadline: DateTime<Utc>,
        now: DateTime<Utc>,
        window: ReferenceWindow,
    ) -> Self {
        let remaining_ms = (deadline - now).num_milliseconds();
        if remaining_ms <= 0 {
            return Self::EXPIRED;
        }

        let total_ms = window.total_ms(remaining_ms);
        let percentage = if total_ms > 0 {
            (remaining_ms as f64 / total_ms as f64 * 100.0).clamp(0.0, 100.0)
        } else {
            100.0
        };

        // remaining_ms is positive here
        let remaining = remaining_ms.unsigned_abs();
        Self {
            days: remaining / MS_PER_DAY,
            hours: ((remaining / MS_PER_HOUR) % 24) as u8,
            minutes: ((remaining / MS_PER_MINUTE) % 60) as u8,
            seconds: ((remaining / MS_PER_SECOND) % 60) as u8,
            is_expired: false,
            percentage,
        }
    }

    /// Classifies the countdown for display.
    ///
    /// # Examples
    ///
    /// ```
    /// use prodx_protocol::Countdown;
    /// use prodx_protocol::countdown::{DEFAULT_WARNING_THRESHOLD, Urgency};
    ///
    /// assert_eq!(Countdown::EXPIRED.urgency(DEFAULT_WARNING_THRESHOLD), Urgency::Expired);
    /// ```
    #[must_use]
    pub fn urgency(&self, warning_threshold: f64) -> Urgency {
        if self.is_expired {
            Urgency::Expired
        } else if self.percentage < warning_threshold {
            Urgency::Warning
        } else {
            Urgency::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn deadline() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn one_of_each_unit() {
        let now = deadline() - TimeDelta::milliseconds(90_061_000);
        let countdown = Countdown::between(deadline(), now);

        assert_eq!(countdown.days, 1);
        assert_eq!(countdown.hours, 1);
        assert_eq!(countdown.minutes, 1);
        assert_eq!(countdown.seconds, 1);
        assert!(!countdown.is_expired);
    }

    #[test]
    fn expired_at_deadline() {
        let countdown = Countdown::between(deadline(), deadline());
        assert_eq!(countdown, Countdown::EXPIRED);
    }

    #[test]
    fn expired_after_deadline() {
        let now = deadline() + TimeDelta::days(3);
        let countdown = Countdown::between(deadline(), now);

        assert!(countdown.is_expired);
        assert_eq!(countdown.days, 0);
        assert_eq!(countdown.hours, 0);
        assert_eq!(countdown.minutes, 0);
        assert_eq!(countdown.seconds, 0);
        assert_eq!(countdown.percentage, 0.0);
    }

    #[test]
    fn sub_second_remainder_is_truncated() {
        let now = deadline() - TimeDelta::milliseconds(1_999);
        let countdown = Countdown::between(deadline(), now);

        assert_eq!(countdown.seconds, 1);
        assert!(!countdown.is_expired);
    }

    #[test]
    fn trailing_window_adds_span_to_remaining() {
        // 7 days remaining against a 7 + 7 day window
        let now = deadline() - TimeDelta::days(7);
        let countdown = Countdown::between(deadline(), now);
        assert_eq!(countdown.percentage, 50.0);
    }

    #[test]
    fn fixed_window_is_clamped_to_full() {
        let window = ReferenceWindow::fixed(TimeDelta::days(7));
        let now = deadline() - TimeDelta::days(10);
        let countdown = Countdown::with_window(deadline(), now, window);
        assert_eq!(countdown.percentage, 100.0);
        assert_eq!(countdown.days, 10);
    }

    #[test]
    fn zero_span_fixed_window_reports_full() {
        let window = ReferenceWindow::fixed(TimeDelta::zero());
        let now = deadline() - TimeDelta::hours(1);
        let countdown = Countdown::with_window(deadline(), now, window);
        assert_eq!(countdown.percentage, 100.0);
    }

    #[test]
    fn urgency_bands() {
        let now = deadline() - TimeDelta::hours(12);
        let soon = Countdown::between(deadline(), now);
        assert_eq!(soon.urgency(DEFAULT_WARNING_THRESHOLD), Urgency::Warning);

        let now = deadline() - TimeDelta::days(30);
        let later = Countdown::between(deadline(), now);
        assert_eq!(later.urgency(DEFAULT_WARNING_THRESHOLD), Urgency::Normal);

        assert_eq!(
            Countdown::EXPIRED.urgency(DEFAULT_WARNING_THRESHOLD),
            Urgency::Expired
        );
    }

    #[test]
    fn window_modes_disagree_between_warning_edges() {
        // 1.5 days left: 17.6% of a trailing window, 21.4% of a fixed one
        let now = deadline() - TimeDelta::hours(36);
        let span = TimeDelta::days(7);

        let trailing = Countdown::with_window(deadline(), now, ReferenceWindow::trailing(span));
        let fixed = Countdown::with_window(deadline(), now, ReferenceWindow::fixed(span));

        assert_eq!(trailing.urgency(DEFAULT_WARNING_THRESHOLD), Urgency::Warning);
        assert_eq!(fixed.urgency(DEFAULT_WARNING_THRESHOLD), Urgency::Normal);
    }

    #[test]
    fn window_mode_json_format() {
        let json = serde_json::to_string(&WindowMode::Trailing).expect("serialize");
        assert_eq!(json, r#""trailing""#);
        let parsed: WindowMode = serde_json::from_str(r#""fixed""#).expect("deserialize");
        assert_eq!(parsed, WindowMode::Fixed);
    }
}
