//! Event handling: maps keyboard events to application messages.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::Message;

/// Map a key event to an optional message.
pub fn map_key_event(key: KeyEvent) -> Option<Message> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Message::Quit),
            KeyCode::Char('n') => Some(Message::AddEntry),
            KeyCode::Char('d') => Some(Message::RemoveEntry),
            KeyCode::Char('r') => Some(Message::Reset),
            KeyCode::Char('l') => Some(Message::ClearStatus),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => Some(Message::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Message::FocusPrev),
        KeyCode::Enter => Some(Message::Submit),
        KeyCode::Esc => Some(Message::Quit),
        KeyCode::Char(c) => Some(Message::InputChar(c)),
        KeyCode::Backspace => Some(Message::InputBackspace),
        _ => None,
    }
}
