//! Application state management.
//!
//! This module defines the core state structures for the TUI application:
//! the task store, focus, card selection, grid scrolling, and the view-only
//! countdown cache fed by the per-card timers.

use std::collections::HashMap;

use prodx_protocol::{Countdown, Task, TaskId, TaskIntent, TaskStore};

/// The current focus area in the UI.
///
/// Determines which UI component receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Focus is on the card dashboard.
    #[default]
    Dashboard,
    /// Focus is on the task creation form.
    Form,
}

/// The application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The task collection. Only changed through [`AppState::apply`].
    pub store: TaskStore,
    /// Current focus area.
    pub focus: Focus,
    /// Index of the selected card, if any.
    pub selected: Option<usize>,
    /// First card row shown in the grid.
    pub scroll_row: usize,
    /// Number of card columns in the last rendered grid.
    pub columns: usize,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Latest countdown reported for each card. Never feeds back into the store.
    countdowns: HashMap<TaskId, Countdown>,
}

impl AppState {
    /// Creates a new application state with the given store.
    ///
    /// # Examples
    ///
    /// ```
    /// use prodx_protocol::TaskStore;
    /// use prodx_tui::AppState;
    ///
    /// let state = AppState::new(TaskStore::new());
    /// assert!(state.selected.is_none());
    /// ```
    #[must_use]
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            focus: Focus::default(),
            selected: None,
            scroll_row: 0,
            columns: 1,
            help_visible: false,
            countdowns: HashMap::new(),
        }
    }

    /// Applies a task intent and keeps selection and the countdown cache
    /// consistent with the result.
    ///
    /// A newly created task becomes the selection. Returns the created ID.
    pub fn apply(&mut self, intent: TaskIntent) -> Option<TaskId> {
        let deleted = match &intent {
            TaskIntent::Delete { id } => Some(*id),
            _ => None,
        };

        let created = self.store.apply(intent);

        if let Some(id) = deleted {
            self.countdowns.remove(&id);
            self.clamp_selection();
        }
        if let Some(id) = created {
            self.selected = self.store.position(id);
        }
        created
    }

    /// Returns the selected task, if any.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.selected.and_then(|idx| self.store.tasks().get(idx))
    }

    /// Returns the ID of the selected task, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<TaskId> {
        self.selected_task().map(|t| t.id)
    }

    /// Selects the card at `index` if it exists.
    pub fn select(&mut self, index: usize) {
        if index < self.store.len() {
            self.selected = Some(index);
        }
    }

    /// Clears the current selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::replace(&mut self.help_visible, false)
    }

    /// Moves the selection to the previous card, wrapping around.
    pub fn navigate_left(&mut self) {
        let len = self.store.len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(0) => Some(len - 1),
            Some(idx) => Some(idx - 1),
            None => Some(0),
        };
    }

    /// Moves the selection to the next card, wrapping around.
    pub fn navigate_right(&mut self) {
        let len = self.store.len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(idx) => Some((idx + 1) % len),
            None => Some(0),
        };
    }

    /// Moves the selection one grid row up. Stays put on the first row.
    pub fn navigate_up(&mut self) {
        let columns = self.columns.max(1);
        self.selected = match self.selected {
            _ if self.store.is_empty() => None,
            Some(idx) if idx >= columns => Some(idx - columns),
            Some(idx) => Some(idx),
            None => Some(0),
        };
    }

    /// Moves the selection one grid row down.
    ///
    /// From the second-to-last row into a shorter last row, lands on the
    /// last card. Stays put on the last row.
    pub fn navigate_down(&mut self) {
        let columns = self.columns.max(1);
        let len = self.store.len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(idx) if idx + columns < len => Some(idx + columns),
            Some(idx) if idx / columns < (len - 1) / columns => Some(len - 1),
            Some(idx) => Some(idx),
            None => Some(0),
        };
    }

    /// Adjusts `scroll_row` so the selected card is within the
    /// `visible_rows` rows currently on screen.
    pub fn scroll_to_selection(&mut self, visible_rows: usize) {
        let columns = self.columns.max(1);
        let total_rows = self.store.len().div_ceil(columns);
        let visible_rows = visible_rows.max(1);

        if let Some(idx) = self.selected {
            let row = idx / columns;
            if row < self.scroll_row {
                self.scroll_row = row;
            } else if row >= self.scroll_row + visible_rows {
                self.scroll_row = row + 1 - visible_rows;
            }
        }

        let max_scroll = total_rows.saturating_sub(visible_rows);
        self.scroll_row = self.scroll_row.min(max_scroll);
    }

    /// Records a countdown reported by a card timer.
    ///
    /// Reports for tasks that no longer exist are dropped. Returns whether
    /// the countdown was recorded.
    pub fn record_countdown(&mut self, id: TaskId, countdown: Countdown) -> bool {
        if self.store.get(id).is_none() {
            return false;
        }
        self.countdowns.insert(id, countdown);
        true
    }

    /// Returns the last countdown reported for a card.
    #[must_use]
    pub fn countdown(&self, id: TaskId) -> Option<&Countdown> {
        self.countdowns.get(&id)
    }

    /// Drops cached countdowns of cards that are not displayed, so a card
    /// coming back into view never shows a value from before it left.
    pub fn retain_countdowns(&mut self, displayed: &[TaskId]) {
        self.countdowns.retain(|id, _| displayed.contains(id));
    }

    fn clamp_selection(&mut self) {
        let len = self.store.len();
        self.selected = match self.selected {
            Some(_) if len == 0 => None,
            Some(idx) => Some(idx.min(len - 1)),
            None => None,
        };
    }
}
