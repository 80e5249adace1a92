//! Centralized layout measurements for the TUI.
//!
//! Shared row heights and minimum sizes for the dashboard. The card grid
//! geometry itself lives in [`crate::widgets::grid`].

/// Height of the header bar in rows.
///
/// The header displays the application title and help cue.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the statistics row (four bordered boxes).
pub const STATS_HEIGHT: u16 = 4;

/// Height of the toolbar holding the "Add New Task" trigger.
pub const TOOLBAR_HEIGHT: u16 = 1;

/// Height of the footer with keybinding hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of each task card in rows.
///
/// Border (2 rows) plus title, countdown label, progress gauge, time units
/// and status badge.
pub const TASK_CARD_HEIGHT: u16 = 7;

/// Narrowest a card may get before the grid drops a column.
pub const MIN_CARD_WIDTH: u16 = 30;

/// Maximum number of card columns.
pub const MAX_COLUMNS: u16 = 3;

/// Minimum terminal height for useful rendering (without header).
///
/// Stats, toolbar, status bar and one card row.
pub const MIN_HEIGHT: u16 = STATS_HEIGHT + TOOLBAR_HEIGHT + STATUS_BAR_HEIGHT + TASK_CARD_HEIGHT;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_HEADER`,
/// we hide the header to reclaim 3 rows of content space.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// The four stat boxes need about ten columns each.
pub const MIN_WIDTH: u16 = 40;
