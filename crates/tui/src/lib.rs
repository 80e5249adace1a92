//! Terminal UI for the prodx task tracker.
//!
//! This crate provides a Ratatui-based single-page dashboard: a stats row,
//! a responsive grid of task cards with live countdowns, and a modal form
//! for creating tasks.
//!
//! # Overview
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Dashboard state (store, selection, cached countdowns)
//! - [`form_state`]: Task creation form state and validation
//! - [`ticker`]: Per-card countdown timers
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//!
//! # Example
//!
//! ```no_run
//! use prodx_protocol::TaskStore;
//! use prodx_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(TaskStore::new());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod form_state;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod ticker;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

pub use app::App;
pub use form_state::{FormError, FormField, FormState};
pub use state::{AppState, Focus};
pub use ticker::CountdownTicker;
