//! Countdown display for a task card.
//!
//! Renders the "Time Remaining" label, a progress gauge proportional to the
//! countdown's percentage, and the `DDd HHh MMm SSs` breakdown. Once the
//! deadline passes, the three rows collapse to a "Deadline Passed" notice.

use prodx_protocol::{Countdown, Urgency};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Filled portion of the gauge.
const GAUGE_FILLED: &str = "█";

/// Empty portion of the gauge.
const GAUGE_EMPTY: &str = "░";

/// Number of rows produced by [`countdown_lines`].
pub const COUNTDOWN_ROWS: usize = 3;

/// Returns the color for an urgency band.
///
/// # Examples
///
/// ```
/// use prodx_protocol::Urgency;
/// use prodx_tui::widgets::urgency_color;
/// use ratatui::style::Color;
///
/// assert_eq!(urgency_color(Urgency::Normal), Color::Green);
/// assert_eq!(urgency_color(Urgency::Warning), Color::Yellow);
/// assert_eq!(urgency_color(Urgency::Expired), Color::Red);
/// ```
#[must_use]
pub const fn urgency_color(urgency: Urgency) -> Color {
    match urgency {
        Urgency::Normal => Color::Green,
        Urgency::Warning => Color::Yellow,
        Urgency::Expired => Color::Red,
    }
}

/// Formats the remaining time as zero-padded units.
///
/// Days grow past two digits when needed.
///
/// # Examples
///
/// ```
/// use prodx_protocol::Countdown;
/// use prodx_tui::widgets::format_time_units;
///
/// assert_eq!(format_time_units(&Countdown::EXPIRED), "00d 00h 00m 00s");
/// ```
#[must_use]
pub fn format_time_units(countdown: &Countdown) -> String {
    format!(
        "{:02}d {:02}h {:02}m {:02}s",
        countdown.days, countdown.hours, countdown.minutes, countdown.seconds
    )
}

/// Builds a gauge of `width` cells filled in proportion to `percentage`.
#[must_use]
pub fn gauge_line(percentage: f64, width: usize, color: Color) -> Line<'static> {
    let ratio = (percentage / 100.0).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64).round() as usize).min(width);

    Line::from(vec![
        Span::styled(GAUGE_FILLED.repeat(filled), Style::default().fg(color)),
        Span::styled(
            GAUGE_EMPTY.repeat(width - filled),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

/// Builds the countdown rows for a card whose inner width is `width`.
///
/// Always returns [`COUNTDOWN_ROWS`] lines so card layouts stay aligned.
#[must_use]
pub fn countdown_lines(
    countdown: &Countdown,
    warning_threshold: f64,
    width: usize,
) -> Vec<Line<'static>> {
    let urgency = countdown.urgency(warning_threshold);
    let color = urgency_color(urgency);

    if urgency == Urgency::Expired {
        return vec![
            Line::from(Span::styled(
                "⚠ Deadline Passed",
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::default(),
        ];
    }

    vec![
        Line::from(vec![
            Span::styled("◷ ", Style::default().fg(color)),
            Span::styled("Time Remaining", Style::default().fg(Color::Gray)),
        ]),
        gauge_line(countdown.percentage, width, color),
        Line::from(Span::styled(
            format_time_units(countdown),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countdown(days: u64, hours: u8, minutes: u8, seconds: u8, percentage: f64) -> Countdown {
        Countdown {
            days,
            hours,
            minutes,
            seconds,
            is_expired: false,
            percentage,
        }
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn time_units_are_zero_padded() {
        insta::assert_snapshot!(
            format_time_units(&countdown(1, 1, 1, 1, 50.0)),
            @"01d 01h 01m 01s"
        );
        insta::assert_snapshot!(
            format_time_units(&countdown(123, 23, 59, 9, 99.0)),
            @"123d 23h 59m 09s"
        );
    }

    #[test]
    fn gauge_fill_is_proportional() {
        let line = gauge_line(50.0, 10, Color::Green);
        assert_eq!(line_text(&line), "█████░░░░░");

        let line = gauge_line(0.0, 4, Color::Green);
        assert_eq!(line_text(&line), "░░░░");

        let line = gauge_line(100.0, 4, Color::Green);
        assert_eq!(line_text(&line), "████");
    }

    #[test]
    fn gauge_clamps_out_of_range_percentages() {
        assert_eq!(line_text(&gauge_line(250.0, 3, Color::Green)), "███");
        assert_eq!(line_text(&gauge_line(-5.0, 3, Color::Green)), "░░░");
    }

    #[test]
    fn lines_use_urgency_color() {
        let lines = countdown_lines(&countdown(0, 5, 0, 0, 10.0), 20.0, 8);
        assert_eq!(lines.len(), COUNTDOWN_ROWS);
        assert_eq!(lines[1].spans[0].style.fg, Some(Color::Yellow));

        let lines = countdown_lines(&countdown(5, 0, 0, 0, 60.0), 20.0, 8);
        assert_eq!(lines[1].spans[0].style.fg, Some(Color::Green));
        assert_eq!(line_text(&lines[2]), "05d 00h 00m 00s");
    }

    #[test]
    fn expired_shows_deadline_passed() {
        let lines = countdown_lines(&Countdown::EXPIRED, 20.0, 8);
        assert_eq!(lines.len(), COUNTDOWN_ROWS);
        assert_eq!(line_text(&lines[0]), "⚠ Deadline Passed");
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::Red));
        assert!(lines[1].spans.is_empty());
    }
}
