//! Punchline Library
//!
//! A terminal joke reader with a hand-drawn pull-to-refresh header.

// Module declarations
pub mod app;
pub mod tui;

// Re-export main entry points
pub use app::{run, RunOptions};
