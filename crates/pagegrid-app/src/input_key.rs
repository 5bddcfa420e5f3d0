//! Terminal-agnostic key representation
//!
//! The TUI converts backend key events into this enum so the handler layer
//! never depends on a terminal crate.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    CharCtrl(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
}
