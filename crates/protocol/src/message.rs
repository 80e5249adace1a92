//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the input handler, the countdown tickers, and the application state.

use serde::{Deserialize, Serialize};

use crate::countdown::Countdown;
use crate::task::TaskId;

/// Messages that represent user actions and timer ticks in the TUI.
///
/// These messages are produced by the input handler and the per-card
/// countdown tickers, and consumed by the application to update state.
///
/// # Examples
///
/// ```
/// use prodx_protocol::Message;
///
/// let msg = Message::NavigateRight;
/// assert!(msg.is_navigation());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection to the previous card.
    NavigateLeft,
    /// Move selection to the next card.
    NavigateRight,
    /// Move selection one row up.
    NavigateUp,
    /// Move selection one row down.
    NavigateDown,
    /// Escape: clear selection or dismiss an overlay (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Open the task creation form.
    OpenForm,
    /// Advance the selected task to its next status.
    CycleStatus,
    /// Delete the selected task.
    DeleteSelected,
    /// Mouse click at coordinates (column, row).
    ClickAt {
        /// Column (x coordinate) of the click.
        column: u16,
        /// Row (y coordinate) of the click.
        row: u16,
    },
    /// A card's countdown was recomputed by its timer.
    Tick {
        /// The task whose countdown was computed.
        id: TaskId,
        /// The freshly computed countdown.
        countdown: Countdown,
    },

    // --- Form messages ---
    /// Close the creation form without creating a task.
    CloseForm,
    /// Focus the next form field.
    FormNextField,
    /// Focus the previous form field.
    FormPrevField,
    /// Input a character into the focused field.
    FormInput {
        /// The character that was input.
        ch: char,
    },
    /// Delete the character before the cursor.
    FormBackspace,
    /// Clear the focused field.
    FormClearField,
    /// Move the cursor left, or pick the previous status.
    FormCursorLeft,
    /// Move the cursor right, or pick the next status.
    FormCursorRight,
    /// Validate the form and create the task.
    FormSubmit,
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use prodx_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(!Message::CycleStatus.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateLeft
                | Self::NavigateRight
                | Self::NavigateUp
                | Self::NavigateDown
                | Self::FormNextField
                | Self::FormPrevField
        )
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use prodx_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message is a form-related action.
    ///
    /// # Examples
    ///
    /// ```
    /// use prodx_protocol::Message;
    ///
    /// assert!(Message::FormSubmit.is_form());
    /// assert!(!Message::OpenForm.is_form());
    /// ```
    #[must_use]
    pub fn is_form(&self) -> bool {
        matches!(
            self,
            Self::CloseForm
                | Self::FormNextField
                | Self::FormPrevField
                | Self::FormInput { .. }
                | Self::FormBackspace
                | Self::FormClearField
                | Self::FormCursorLeft
                | Self::FormCursorRight
                | Self::FormSubmit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_navigation_detection() {
        assert!(Message::NavigateLeft.is_navigation());
        assert!(Message::NavigateRight.is_navigation());
        assert!(Message::NavigateUp.is_navigation());
        assert!(Message::NavigateDown.is_navigation());
        assert!(Message::FormNextField.is_navigation());
        assert!(!Message::CycleStatus.is_navigation());
        assert!(!Message::Quit.is_navigation());
    }

    #[test]
    fn message_terminating_detection() {
        assert!(Message::Quit.is_terminating());
        assert!(!Message::CloseForm.is_terminating());
        assert!(!Message::DeleteSelected.is_terminating());
    }

    #[test]
    fn message_form_detection() {
        assert!(Message::CloseForm.is_form());
        assert!(Message::FormInput { ch: 'a' }.is_form());
        assert!(Message::FormBackspace.is_form());
        assert!(Message::FormClearField.is_form());
        assert!(Message::FormCursorLeft.is_form());
        assert!(Message::FormCursorRight.is_form());
        assert!(Message::FormSubmit.is_form());
        assert!(!Message::OpenForm.is_form());
        assert!(!Message::Quit.is_form());
    }

    #[test]
    fn message_json_format() {
        let json = serde_json::to_string(&Message::DeleteSelected).expect("serialize");
        assert_eq!(json, r#""delete_selected""#);

        let json = serde_json::to_string(&Message::FormInput { ch: 'x' }).expect("serialize");
        assert_eq!(json, r#"{"form_input":{"ch":"x"}}"#);
    }

    #[test]
    fn tick_roundtrips_with_countdown() {
        let msg = Message::Tick {
            id: TaskId::new_v4(),
            countdown: Countdown::EXPIRED,
        };
        let json = serde_json::to_string(&msg).expect("serialize");
        let parsed: Message = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(msg, parsed);
    }
}
