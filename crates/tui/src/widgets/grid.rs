//! Responsive card grid.
//!
//! Cards flow left to right in one to three columns depending on the
//! available width, in store order. Rows that do not fit are scrolled
//! off; only the cards laid out here are considered displayed.

use prodx_protocol::{Countdown, Task};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::task_card::render_task_card;
use crate::layout::{MAX_COLUMNS, MIN_CARD_WIDTH, TASK_CARD_HEIGHT};

/// Returns how many card columns fit in `width`.
///
/// # Examples
///
/// ```
/// use prodx_tui::widgets::grid::column_count;
///
/// assert_eq!(column_count(40), 1);
/// assert_eq!(column_count(60), 2);
/// assert_eq!(column_count(200), 3);
/// ```
#[must_use]
pub fn column_count(width: u16) -> usize {
    usize::from((width / MIN_CARD_WIDTH).clamp(1, MAX_COLUMNS))
}

/// Returns how many full card rows fit in `height` (at least one).
#[must_use]
pub fn visible_rows(height: u16) -> usize {
    usize::from((height / TASK_CARD_HEIGHT).max(1))
}

/// Lays out `count` cards in `columns` columns, starting at `first_row`.
///
/// Returns the index of each displayed card with its area. Cards whose row
/// would not fit vertically are omitted.
#[must_use]
pub fn card_areas(
    area: Rect,
    count: usize,
    columns: usize,
    first_row: usize,
) -> Vec<(usize, Rect)> {
    let columns = columns.max(1);
    let card_width = area.width / columns as u16;
    if card_width == 0 {
        return Vec::new();
    }

    let mut areas = Vec::new();
    for index in (first_row * columns)..count {
        let row = (index / columns - first_row) as u16;
        let col = (index % columns) as u16;

        let y = area.y + row * TASK_CARD_HEIGHT;
        if y + TASK_CARD_HEIGHT > area.bottom() {
            break;
        }

        let x = area.x + col * card_width;
        // Last column absorbs the rounding remainder
        let width = if usize::from(col) == columns - 1 {
            area.right() - x
        } else {
            card_width
        };

        areas.push((index, Rect::new(x, y, width, TASK_CARD_HEIGHT)));
    }
    areas
}

/// Renders the cards laid out by [`card_areas`].
///
/// `countdown_for` supplies each card's countdown.
pub fn render_grid<F>(
    tasks: &[Task],
    cards: &[(usize, Rect)],
    selected: Option<usize>,
    countdown_for: F,
    warning_threshold: f64,
    buf: &mut Buffer,
) where
    F: Fn(&Task) -> Countdown,
{
    for &(index, card_area) in cards {
        if let Some(task) = tasks.get(index) {
            let countdown = countdown_for(task);
            render_task_card(
                task,
                &countdown,
                warning_threshold,
                selected == Some(index),
                card_area,
                buf,
            );
        }
    }
}

/// Renders the hint shown when there are no tasks.
pub fn render_empty_hint(area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "No tasks yet.",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("n", Style::default().fg(Color::Yellow)),
            Span::styled(" to add one.", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

/// Finds the card under a screen position.
#[must_use]
pub fn card_at(cards: &[(usize, Rect)], column: u16, row: u16) -> Option<usize> {
    cards
        .iter()
        .find(|(_, area)| area.contains((column, row).into()))
        .map(|(index, _)| *index)
}
