//! Line editor for the game-over name prompt.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::MAX_NAME_CHARS;

/// What a key did to the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameEvent {
    /// Buffer changed or key ignored; keep prompting.
    Editing,
    /// Enter: submit the current buffer (may be blank).
    Submit(String),
    /// Esc: leave without submitting.
    Cancel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameEntry {
    buf: String,
}

impl NameEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn push(&mut self, ch: char) -> bool {
        if ch.is_control() || self.buf.chars().count() >= MAX_NAME_CHARS {
            return false;
        }
        self.buf.push(ch);
        true
    }

    pub fn backspace(&mut self) {
        self.buf.pop();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> NameEvent {
        match key.code {
            KeyCode::Enter => NameEvent::Submit(std::mem::take(&mut self.buf)),
            KeyCode::Esc => NameEvent::Cancel,
            KeyCode::Backspace => {
                self.backspace();
                NameEvent::Editing
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.push(ch);
                NameEvent::Editing
            }
            _ => NameEvent::Editing,
        }
    }
}
