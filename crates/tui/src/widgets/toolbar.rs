//! Toolbar with the "Add New Task" trigger.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Button caption, including padding.
const ADD_BUTTON_LABEL: &str = " + Add New Task (n) ";

/// Returns the clickable area of the "Add New Task" button within the
/// toolbar area (right-aligned).
#[must_use]
pub fn add_button_area(area: Rect) -> Rect {
    let width = (ADD_BUTTON_LABEL.chars().count() as u16).min(area.width);
    Rect {
        x: area.right().saturating_sub(width),
        y: area.y,
        width,
        height: area.height.min(1),
    }
}

/// Renders the toolbar: a task heading on the left and the add button on
/// the right.
pub fn render_toolbar(task_count: usize, area: Rect, buf: &mut Buffer) {
    let noun = if task_count == 1 { "task" } else { "tasks" };
    Paragraph::new(Line::from(vec![
        Span::styled(
            "Your Tasks",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" ({task_count} {noun})"),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .render(area, buf);

    let button = add_button_area(area);
    Paragraph::new(Span::styled(
        ADD_BUTTON_LABEL,
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    ))
    .render(button, buf);
}
