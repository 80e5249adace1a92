//! Task card rendering widget.
//!
//! A card shows the task title, its live countdown, and a status badge. The
//! border color reflects the task's status, with brighter colors and a thick
//! border used for the selected card.

use prodx_protocol::{Countdown, Task, TaskStatus};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::countdown::countdown_lines;

/// Returns the color associated with a task status.
///
/// # Examples
///
/// ```
/// use prodx_protocol::TaskStatus;
/// use prodx_tui::widgets::status_color;
/// use ratatui::style::Color;
///
/// assert_eq!(status_color(TaskStatus::Pending), Color::Yellow);
/// assert_eq!(status_color(TaskStatus::InProgress), Color::Blue);
/// assert_eq!(status_color(TaskStatus::Completed), Color::Green);
/// ```
#[must_use]
pub const fn status_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Pending => Color::Yellow,
        TaskStatus::InProgress => Color::Blue,
        TaskStatus::Completed => Color::Green,
    }
}

/// Brighter variant of [`status_color`] for the selected card.
#[must_use]
const fn status_color_bright(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Pending => Color::LightYellow,
        TaskStatus::InProgress => Color::LightBlue,
        TaskStatus::Completed => Color::LightGreen,
    }
}

/// Status badge glyph.
const fn status_symbol(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "○",
        TaskStatus::InProgress => "◐",
        TaskStatus::Completed => "●",
    }
}

/// Renders a task card to the buffer.
///
/// # Layout
///
/// ```text
/// ┌────────────────────────────┐
/// │Write quarterly report      │
/// │◷ Time Remaining            │
/// │███████████░░░░░░░░░░░░░░░░░│
/// │02d 00h 00m 00s             │
/// │○ Pending                   │
/// └────────────────────────────┘
/// ```
///
/// # Examples
///
/// ```
/// use chrono::{TimeDelta, Utc};
/// use prodx_protocol::{Countdown, Task, TaskDraft, TaskId};
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use prodx_tui::widgets::render_task_card;
///
/// let now = Utc::now();
/// let draft = TaskDraft::new("Ship it", now + TimeDelta::days(1));
/// let task = Task::from_draft(TaskId::new_v4(), draft);
/// let countdown = Countdown::between(task.deadline, now);
///
/// let area = Rect::new(0, 0, 30, 7);
/// let mut buf = Buffer::empty(area);
/// render_task_card(&task, &countdown, 20.0, false, area, &mut buf);
/// ```
pub fn render_task_card(
    task: &Task,
    countdown: &Countdown,
    warning_threshold: f64,
    is_selected: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    // Skip rendering if area is too small
    if area.width < 4 || area.height < 3 {
        return;
    }

    let (border_color, border_type, title_style) = if is_selected {
        (
            status_color_bright(task.status),
            BorderType::Thick,
            Style::default()
                .fg(status_color_bright(task.status))
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            status_color(task.status),
            BorderType::Rounded,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )
    };

    let inner_width = area.width.saturating_sub(2) as usize;

    let mut content = Vec::with_capacity(5);
    content.push(Line::from(Span::styled(
        truncate_string(&task.title, inner_width),
        title_style,
    )));
    content.extend(countdown_lines(countdown, warning_threshold, inner_width));
    content.push(Line::from(Span::styled(
        format!(
            "{} {}",
            status_symbol(task.status),
            task.status.display_name()
        ),
        Style::default().fg(status_color(task.status)),
    )));

    Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(border_color)),
        )
        .render(area, buf);
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}
