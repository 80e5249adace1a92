//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages, with a separate mapping while the creation
//! form is open.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use prodx_protocol::Message;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a dashboard event (keyboard or mouse) to an application message.
///
/// Returns `None` if the event is not handled.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts an event to a form message while the creation form is open.
///
/// Mouse events are ignored by the modal.
#[must_use]
pub fn form_event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_form_message(*key),
        _ => None,
    }
}

/// Only left-click presses produce a `ClickAt` message.
#[must_use]
fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

fn is_ctrl(key: &KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}

/// Converts a key event on the dashboard to an application message.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Escape (dismiss help or clear selection) |
/// | Arrows | Navigate cards |
/// | `n` or `a` | Add a new task |
/// | `Space`, `Enter` or `s` | Cycle the selected task's status |
/// | `d` or `Delete` | Delete the selected task |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl(&key, 'c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        KeyCode::Char('n' | 'a') => Some(Message::OpenForm),
        KeyCode::Enter | KeyCode::Char(' ' | 's') => Some(Message::CycleStatus),
        KeyCode::Delete | KeyCode::Char('d') => Some(Message::DeleteSelected),

        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a key event to a form message.
///
/// # Key Bindings (Form)
///
/// | Key | Action |
/// |-----|--------|
/// | `Tab` or `Down` | Next field |
/// | `Shift+Tab` or `Up` | Previous field |
/// | `Left` / `Right` | Move cursor, or change status |
/// | `Ctrl+U` | Clear field |
/// | `Enter` | Create task |
/// | `Esc` | Cancel |
/// | `Backspace` | Delete before cursor |
/// | Any char | Input |
#[must_use]
pub fn key_to_form_message(key: KeyEvent) -> Option<Message> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl(&key, 'c') {
        return Some(Message::Quit);
    }
    if is_ctrl(&key, 'u') {
        return Some(Message::FormClearField);
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(Message::CloseForm),
        KeyCode::Enter => Some(Message::FormSubmit),
        KeyCode::Tab | KeyCode::Down => Some(Message::FormNextField),
        KeyCode::BackTab | KeyCode::Up => Some(Message::FormPrevField),
        KeyCode::Left => Some(Message::FormCursorLeft),
        KeyCode::Right => Some(Message::FormCursorRight),
        KeyCode::Backspace => Some(Message::FormBackspace),
        KeyCode::Char(ch) => Some(Message::FormInput { ch }),
        _ => None,
    }
}
