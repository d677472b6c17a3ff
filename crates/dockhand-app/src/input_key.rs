//! Terminal-library-independent key events
//!
//! The TUI layer converts raw terminal key events into `InputKey` before
//! they enter the update loop, so this crate never depends on a specific
//! terminal backend and key handling stays unit-testable.

/// A single key press, already normalized by the terminal layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character without modifiers (case preserved)
    Char(char),
    /// Character with Ctrl held
    CharCtrl(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// Function key, 1-based
    F(u8),
}

impl InputKey {
    /// Whether this key carries text for an input field
    pub fn as_text_char(&self) -> Option<char> {
        match self {
            InputKey::Char(c) => Some(*c),
            _ => None,
        }
    }
}
