//! Statistics row.
//!
//! Four boxes summarizing the task collection: total, pending, in progress,
//! and completed. The counts are always derived from the store.

use prodx_protocol::{TaskStats, TaskStatus};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::task_card::status_color;

/// Renders the four statistic boxes side by side.
///
/// # Examples
///
/// ```
/// use prodx_protocol::TaskStats;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use prodx_tui::widgets::render_stats;
///
/// let area = Rect::new(0, 0, 80, 4);
/// let mut buf = Buffer::empty(area);
/// render_stats(&TaskStats::default(), area, &mut buf);
/// ```
pub fn render_stats(stats: &TaskStats, area: Rect, buf: &mut Buffer) {
    let boxes = [
        ("Total Tasks", stats.total, Color::Cyan),
        (
            TaskStatus::Pending.display_name(),
            stats.pending,
            status_color(TaskStatus::Pending),
        ),
        (
            TaskStatus::InProgress.display_name(),
            stats.in_progress,
            status_color(TaskStatus::InProgress),
        ),
        (
            TaskStatus::Completed.display_name(),
            stats.completed,
            status_color(TaskStatus::Completed),
        ),
    ];

    let areas = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    for ((label, count, color), box_area) in boxes.into_iter().zip(areas.iter()) {
        render_stat_box(label, count, color, *box_area, buf);
    }
}

fn render_stat_box(label: &str, count: usize, color: Color, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            count.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn stats_render_labels_and_counts() {
        let stats = TaskStats {
            total: 6,
            pending: 3,
            in_progress: 2,
            completed: 1,
        };
        let area = Rect::new(0, 0, 80, 4);
        let mut buf = Buffer::empty(area);

        render_stats(&stats, area, &mut buf);

        let content = buffer_to_string(&buf);
        for label in ["Total Tasks", "Pending", "In Progress", "Completed"] {
            assert!(content.contains(label), "missing {label}");
        }
        let counts = content.lines().nth(2).unwrap();
        let digits: Vec<&str> = counts
            .split(|c: char| !c.is_ascii_digit())
            .filter(|s| !s.is_empty())
            .collect();
        assert_eq!(digits, ["6", "3", "2", "1"]);
    }

    #[test]
    fn counts_use_status_colors() {
        let stats = TaskStats {
            total: 1,
            pending: 1,
            in_progress: 0,
            completed: 0,
        };
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);

        render_stats(&stats, area, &mut buf);

        // Pending box spans columns 10..20; its count is centered on row 2
        let pending_count = (10..20)
            .filter_map(|x| buf.cell((x, 2)))
            .find(|cell| cell.symbol() == "1")
            .unwrap();
        assert_eq!(pending_count.fg, Color::Yellow);
    }
}
