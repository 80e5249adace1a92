//! Status bar rendering widget.
//!
//! A single footer line with the keybindings that apply right now.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::state::Focus;

/// Returns the `(key, action)` hints for the current context.
fn hints(focus: Focus, has_selection: bool) -> &'static [(&'static str, &'static str)] {
    match (focus, has_selection) {
        (Focus::Form, _) => &[
            ("Tab", "Next field"),
            ("Enter", "Create"),
            ("Esc", "Cancel"),
        ],
        (Focus::Dashboard, true) => &[
            ("Space", "Cycle status"),
            ("d", "Delete"),
            ("n", "Add"),
            ("?", "Help"),
            ("Ctrl+C", "Quit"),
        ],
        (Focus::Dashboard, false) => &[
            ("n", "Add"),
            ("←→↑↓", "Select"),
            ("?", "Help"),
            ("Ctrl+C", "Quit"),
        ],
    }
}

/// Renders the status bar with keybinding hints.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use prodx_tui::Focus;
/// use prodx_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(Focus::Dashboard, false, area, &mut buf);
/// ```
pub fn render_status_bar(focus: Focus, has_selection: bool, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::DarkGray);

    let spans: Vec<Span<'static>> = hints(focus, has_selection)
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(format!(" {key}"), key_style),
                Span::styled(format!(" {action} "), text_style),
            ]
        })
        .collect();

    Paragraph::new(Line::from(spans)).render(area, buf);
}
