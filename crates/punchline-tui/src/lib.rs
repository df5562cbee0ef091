//! punchline-tui - Terminal UI for Punchline
//!
//! This crate provides the ratatui-based terminal interface: event
//! polling, the braille header scene, the joke feed and the overlay
//! widgets. The binary crate owns the terminal and the event loop and
//! calls [`render::view`] once per frame.

pub mod event;
pub mod layout;
pub mod render;
pub mod scene;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use event::poll;
pub use render::view;
