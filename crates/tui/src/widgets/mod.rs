//! Widget components for the prodx dashboard.
//!
//! Each widget is a plain function that renders borrowed state into a
//! buffer, so the app composes them freely and tests render them directly.
//!
//! # Modules
//!
//! - [`stats`]: The four statistics boxes
//! - [`toolbar`]: Task count and the add button
//! - [`grid`]: Responsive card layout and hit-testing
//! - [`task_card`]: A single task card
//! - [`countdown`]: Countdown rows and urgency colors
//! - [`form`]: The task creation modal
//! - [`help`]: Keybinding overlay
//! - [`status_bar`]: Footer with context hints
//!
//! # Color Coding
//!
//! | Status | Color |
//! |--------|-------|
//! | Pending | Yellow |
//! | In Progress | Blue |
//! | Completed | Green |
//!
//! Countdowns are green, turn yellow once the remaining share of the window
//! drops below the warning threshold, and red when the deadline has passed.
//!
//! # Example
//!
//! ```
//! use prodx_protocol::TaskStats;
//! use prodx_tui::widgets;
//! use ratatui::{buffer::Buffer, layout::Rect};
//!
//! let area = Rect::new(0, 0, 80, 4);
//! let mut buf = Buffer::empty(area);
//! widgets::render_stats(&TaskStats::default(), area, &mut buf);
//! ```

pub mod countdown;
pub mod form;
pub mod grid;
pub mod help;
pub mod stats;
pub mod status_bar;
pub mod task_card;
pub mod toolbar;

pub use countdown::{format_time_units, urgency_color};
pub use form::render_form;
pub use grid::{card_areas, card_at, column_count, render_grid};
pub use help::render_help_overlay;
pub use stats::render_stats;
pub use status_bar::render_status_bar;
pub use task_card::{render_task_card, status_color};
pub use toolbar::render_toolbar;
