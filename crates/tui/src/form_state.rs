//! Task creation form state.
//!
//! The form collects a title, a deadline, and an initial status. Text fields
//! support cursor editing; the status field is a cyclic selector. Validation
//! happens on submit, and a failed submit leaves the form open with the
//! error shown.

use chrono::{DateTime, Utc};
use prodx_protocol::deadline::{default_deadline_text, parse_deadline};
use prodx_protocol::{ProtocolError, TaskDraft, TaskStatus};

/// Why the form could not produce a task.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The title is empty or only whitespace.
    #[error("Task title is required")]
    EmptyTitle,

    /// The deadline text could not be parsed.
    #[error("Deadline: {0}")]
    InvalidDeadline(#[source] ProtocolError),
}

/// A field of the creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Task title text.
    #[default]
    Title,
    /// Deadline text.
    Deadline,
    /// Initial status selector.
    Status,
}

impl FormField {
    /// All fields in focus order.
    pub const ALL: [FormField; 3] = [Self::Title, Self::Deadline, Self::Status];

    /// Returns the field after this one, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Deadline,
            Self::Deadline => Self::Status,
            Self::Status => Self::Title,
        }
    }

    /// Returns the field before this one, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Title => Self::Status,
            Self::Deadline => Self::Title,
            Self::Status => Self::Deadline,
        }
    }

    /// Returns the label shown next to the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Task Title",
            Self::Deadline => "Deadline",
            Self::Status => "Status",
        }
    }
}

/// A single-line text input with a byte-offset cursor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    /// Creates an input holding `value` with the cursor at the end.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    /// Returns the current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the cursor position as a byte offset.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the cursor position in characters, for display.
    #[must_use]
    pub fn cursor_column(&self) -> usize {
        self.value[..self.cursor].chars().count()
    }

    /// Inserts a character at the cursor position.
    pub fn insert_char(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if let Some((prev, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.value.remove(prev);
            self.cursor = prev;
        }
    }

    /// Moves the cursor one character left.
    pub fn move_left(&mut self) {
        if let Some((prev, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.cursor = prev;
        }
    }

    /// Moves the cursor one character right.
    pub fn move_right(&mut self) {
        if let Some(ch) = self.value[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    /// Empties the input.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

/// State of the open creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// Title input.
    pub title: TextInput,
    /// Deadline input.
    pub deadline: TextInput,
    /// Selected initial status.
    pub status: TaskStatus,
    /// The field receiving input.
    pub focused: FormField,
    /// Error from the last failed submit.
    pub error: Option<FormError>,
}

impl FormState {
    /// Creates an empty form whose deadline defaults to today's date.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use prodx_tui::form_state::FormState;
    ///
    /// let now = Utc.with_ymd_and_hms(2025, 3, 9, 18, 0, 0).unwrap();
    /// let form = FormState::new(now);
    /// assert_eq!(form.deadline.value(), "2025-03-09");
    /// assert!(form.title.value().is_empty());
    /// ```
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            title: TextInput::default(),
            deadline: TextInput::new(default_deadline_text(now)),
            status: TaskStatus::default(),
            focused: FormField::default(),
            error: None,
        }
    }

    /// Focuses the next field.
    pub fn next_field(&mut self) {
        self.focused = self.focused.next();
    }

    /// Focuses the previous field.
    pub fn prev_field(&mut self) {
        self.focused = self.focused.previous();
    }

    /// Types a character into the focused field.
    ///
    /// On the status field, a space advances the status.
    pub fn input_char(&mut self, ch: char) {
        match self.focused_input_mut() {
            Some(input) => input.insert_char(ch),
            None if ch == ' ' => self.status = self.status.next(),
            None => {}
        }
    }

    /// Deletes the character before the cursor in the focused field.
    pub fn backspace(&mut self) {
        if let Some(input) = self.focused_input_mut() {
            input.backspace();
        }
    }

    /// Clears the focused field. On the status field, resets to `Pending`.
    pub fn clear_field(&mut self) {
        match self.focused_input_mut() {
            Some(input) => input.clear(),
            None => self.status = TaskStatus::default(),
        }
    }

    /// Moves the cursor left, or selects the previous status.
    pub fn cursor_left(&mut self) {
        match self.focused_input_mut() {
            Some(input) => input.move_left(),
            None => self.status = self.status.previous(),
        }
    }

    /// Moves the cursor right, or selects the next status.
    pub fn cursor_right(&mut self) {
        match self.focused_input_mut() {
            Some(input) => input.move_right(),
            None => self.status = self.status.next(),
        }
    }

    /// Checks the form without changing it.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::EmptyTitle`] for a blank title, or
    /// [`FormError::InvalidDeadline`] if the deadline text does not parse.
    pub fn validate(&self) -> Result<TaskDraft, FormError> {
        let title = self.title.value().trim();
        if title.is_empty() {
            return Err(FormError::EmptyTitle);
        }

        let deadline =
            parse_deadline(self.deadline.value().trim()).map_err(FormError::InvalidDeadline)?;

        Ok(TaskDraft::new(title, deadline).with_status(self.status))
    }

    /// Validates the form, remembering the error on failure.
    ///
    /// # Errors
    ///
    /// See [`FormState::validate`].
    pub fn submit(&mut self) -> Result<TaskDraft, FormError> {
        let result = self.validate();
        self.error = result.as_ref().err().cloned();
        result
    }

    fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focused {
            FormField::Title => Some(&mut self.title),
            FormField::Deadline => Some(&mut self.deadline),
            FormField::Status => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn form() -> FormState {
        FormState::new(Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap())
    }

    fn type_text(form: &mut FormState, text: &str) {
        for ch in text.chars() {
            form.input_char(ch);
        }
    }

    #[test]
    fn text_input_editing() {
        let mut input = TextInput::default();
        input.insert_char('h');
        input.insert_char('i');
        assert_eq!(input.value(), "hi");
        assert_eq!(input.cursor(), 2);

        input.backspace();
        assert_eq!(input.value(), "h");
        assert_eq!(input.cursor(), 1);

        input.backspace();
        input.backspace();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn text_input_multibyte_cursor() {
        let mut input = TextInput::new("café");
        assert_eq!(input.cursor(), 5);
        assert_eq!(input.cursor_column(), 4);

        input.move_left();
        assert_eq!(input.cursor(), 3);
        input.insert_char('!');
        assert_eq!(input.value(), "caf!é");

        input.move_right();
        input.move_right();
        assert_eq!(input.cursor(), input.value().len());

        input.backspace();
        assert_eq!(input.value(), "caf!");
    }

    #[test]
    fn text_input_move_left_at_start_stays() {
        let mut input = TextInput::new("ab");
        input.move_left();
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor(), 0);
        input.backspace();
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn new_form_defaults() {
        let form = form();
        assert_eq!(form.title.value(), "");
        assert_eq!(form.deadline.value(), "2025-01-15");
        assert_eq!(form.status, TaskStatus::Pending);
        assert_eq!(form.focused, FormField::Title);
        assert!(form.error.is_none());
    }

    #[test]
    fn field_focus_wraps() {
        let mut form = form();
        form.next_field();
        assert_eq!(form.focused, FormField::Deadline);
        form.next_field();
        form.next_field();
        assert_eq!(form.focused, FormField::Title);
        form.prev_field();
        assert_eq!(form.focused, FormField::Status);
    }

    #[test]
    fn status_field_cycles() {
        let mut form = form();
        form.focused = FormField::Status;

        form.cursor_right();
        assert_eq!(form.status, TaskStatus::InProgress);
        form.input_char(' ');
        assert_eq!(form.status, TaskStatus::Completed);
        form.cursor_left();
        assert_eq!(form.status, TaskStatus::InProgress);
        form.input_char('x');
        assert_eq!(form.status, TaskStatus::InProgress);
        form.clear_field();
        assert_eq!(form.status, TaskStatus::Pending);
    }

    #[test]
    fn submit_empty_title_fails_and_records_error() {
        let mut form = form();
        type_text(&mut form, "   ");
        assert_eq!(form.submit(), Err(FormError::EmptyTitle));
        assert_eq!(form.error, Some(FormError::EmptyTitle));
    }

    #[test]
    fn submit_bad_deadline_fails() {
        let mut form = form();
        type_text(&mut form, "Write report");
        form.next_field();
        form.clear_field();
        type_text(&mut form, "next tuesday");

        assert!(matches!(
            form.submit(),
            Err(FormError::InvalidDeadline(ProtocolError::InvalidDeadline { .. }))
        ));
        assert!(form.error.is_some());
    }

    #[test]
    fn submit_builds_trimmed_draft() {
        let mut form = form();
        type_text(&mut form, "  Write report ");
        form.next_field();
        form.clear_field();
        type_text(&mut form, "2025-02-01");
        form.next_field();
        form.cursor_right();

        let draft = form.submit().unwrap();
        assert_eq!(draft.title, "Write report");
        assert_eq!(
            draft.deadline,
            NaiveDate::from_ymd_opt(2025, 2, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
                .and_utc()
        );
        assert_eq!(draft.status, TaskStatus::InProgress);
        assert!(form.error.is_none());
    }

    #[test]
    fn successful_submit_clears_previous_error() {
        let mut form = form();
        assert!(form.submit().is_err());
        type_text(&mut form, "Now valid");
        assert!(form.submit().is_ok());
        assert!(form.error.is_none());
    }

    #[test]
    fn error_messages() {
        assert_eq!(FormError::EmptyTitle.to_string(), "Task title is required");
        let err = FormError::InvalidDeadline(ProtocolError::InvalidDeadline {
            input: "soon".to_string(),
        });
        assert!(err.to_string().starts_with("Deadline: invalid deadline \"soon\""));
    }
}
