//! Sample task texts and key sequences.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub const BUY_MILK: &str = "Buy milk";

pub const SAMPLE_TASKS: &[&str] = &["Buy milk", "Walk the dog", "Water the plants"];

/// Inputs that must be rejected with the "Task cannot be empty" alert.
pub const BLANK_INPUTS: &[&str] = &["", " ", "   ", "\t"];

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// One key press per character of `text`.
pub fn type_text(text: &str) -> Vec<KeyEvent> {
    text.chars().map(|c| key(KeyCode::Char(c))).collect()
}

/// Type `text` into the input and press Enter.
pub fn submit_text(text: &str) -> Vec<KeyEvent> {
    let mut keys = type_text(text);
    keys.push(key(KeyCode::Enter));
    keys
}
