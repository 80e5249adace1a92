//! Helpers shared by the widget and app rendering tests.

use ratatui::buffer::Buffer;

/// Renders a buffer as one line per row with trailing spaces removed, the
/// form the card, grid, and toolbar snapshots are written in.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in buf.area.top()..buf.area.bottom() {
        let row: String = (buf.area.left()..buf.area.right())
            .filter_map(|x| buf.cell((x, y)))
            .map(|cell| cell.symbol())
            .collect();
        result.push_str(row.trim_end_matches(' '));
        result.push('\n');
    }
    result
}
