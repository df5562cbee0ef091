//! Backend-agnostic key representation.
//!
//! The terminal layer translates its own key events into [`InputKey`]
//! before anything reaches the update loop, so key handling stays
//! testable without a real terminal attached.

/// A single key press, already normalized by the terminal layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// A plain character key (includes shifted characters).
    Char(char),
    /// A character pressed together with Ctrl.
    CharCtrl(char),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,
}
