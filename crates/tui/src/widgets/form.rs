//! Task creation modal.
//!
//! Renders [`FormState`] as a centered dialog with the title, deadline, and
//! status fields, the last validation error, and the cancel/create hints.

use prodx_protocol::TaskStatus;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::help::centered_rect;
use super::task_card::status_color;
use crate::form_state::{FormField, FormState, TextInput};

/// The width of the form dialog.
const FORM_WIDTH: u16 = 52;

/// The height of the form dialog.
const FORM_HEIGHT: u16 = 14;

/// Placeholder shown in an empty title field.
const TITLE_PLACEHOLDER: &str = "Enter task title";

/// Format hint shown under the deadline field.
const DEADLINE_HINT: &str = "YYYY-MM-DD or YYYY-MM-DDTHH:MM (local)";

/// Returns the dialog area within `area`.
#[must_use]
pub fn form_area(area: Rect) -> Rect {
    centered_rect(FORM_WIDTH, FORM_HEIGHT, area)
}

/// Renders the creation form on top of `area`.
///
/// # Layout
///
/// ```text
/// ╭ Create New Task ─────────────────────╮
/// │                                      │
/// │ Task Title                           │
/// │ > Enter task title                   │
/// │ Deadline                             │
/// │   2025-01-15                         │
/// │   YYYY-MM-DD or YYYY-MM-DDTHH:MM     │
/// │ Status                               │
/// │   ◀ Pending ▶                        │
/// │                                      │
/// │ Esc Cancel   Enter Create Task       │
/// ╰──────────────────────────────────────╯
/// ```
pub fn render_form(form: &FormState, area: Rect, buf: &mut Buffer) {
    let popup_area = form_area(area);
    Clear.render(popup_area, buf);

    let label_style = Style::default().fg(Color::Gray);
    let focused_label_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let label = |field: FormField| {
        let style = if form.focused == field {
            focused_label_style
        } else {
            label_style
        };
        Line::from(Span::styled(format!(" {}", field.label()), style))
    };

    let mut lines = vec![
        Line::default(),
        label(FormField::Title),
        input_line(
            &form.title,
            form.focused == FormField::Title,
            Some(TITLE_PLACEHOLDER),
        ),
        label(FormField::Deadline),
        input_line(&form.deadline, form.focused == FormField::Deadline, None),
        Line::from(Span::styled(
            format!("   {DEADLINE_HINT}"),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
        label(FormField::Status),
        status_line(form.status, form.focused == FormField::Status),
        Line::default(),
    ];

    lines.push(match &form.error {
        Some(error) => Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        )),
        None => Line::default(),
    });

    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);
    lines.push(Line::from(vec![
        Span::styled(" Esc", key_style),
        Span::styled(" Cancel   ", text_style),
        Span::styled("Enter", key_style),
        Span::styled(" Create Task", text_style),
    ]));

    let block = Block::default()
        .title(Span::styled(
            " Create New Task ",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightCyan));

    Paragraph::new(lines).block(block).render(popup_area, buf);
}

/// Builds the line for a text input, drawing the cursor when focused.
fn input_line(input: &TextInput, focused: bool, placeholder: Option<&str>) -> Line<'static> {
    let marker = if focused { " > " } else { "   " };
    let marker_style = Style::default().fg(Color::Cyan);
    let text_style = Style::default().fg(Color::White);
    let cursor_style = Style::default().add_modifier(Modifier::REVERSED);

    if input.value().is_empty() {
        let placeholder = placeholder.unwrap_or_default().to_string();
        let mut spans = vec![Span::styled(marker, marker_style)];
        if focused {
            spans.push(Span::styled(" ", cursor_style));
        }
        spans.push(Span::styled(
            placeholder,
            Style::default().fg(Color::DarkGray),
        ));
        return Line::from(spans);
    }

    if !focused {
        return Line::from(vec![
            Span::styled(marker, marker_style),
            Span::styled(input.value().to_string(), text_style),
        ]);
    }

    let (before, rest) = input.value().split_at(input.cursor());
    let mut rest_chars = rest.chars();
    let under_cursor = rest_chars
        .next()
        .map_or_else(|| " ".to_string(), |c| c.to_string());
    let after: String = rest_chars.collect();

    Line::from(vec![
        Span::styled(marker, marker_style),
        Span::styled(before.to_string(), text_style),
        Span::styled(under_cursor, cursor_style),
        Span::styled(after, text_style),
    ])
}

/// Builds the status selector line.
fn status_line(status: TaskStatus, focused: bool) -> Line<'static> {
    let arrow_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let marker = if focused { " > " } else { "   " };

    Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled("◀ ", arrow_style),
        Span::styled(
            status.display_name(),
            Style::default()
                .fg(status_color(status))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", arrow_style),
    ])
}
