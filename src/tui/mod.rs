//! TUI shell: terminal ownership and the event loop
//!
//! The rendering and widget code lives in the `punchline-tui` crate;
//! this module owns the terminal and drives everything:
//!
//! - `runner`: Main entry point and event loop
//! - `actions`: Fetch task spawning and aborting
//! - `process`: Message processing through the update function
//! - `terminal`: Panic hook for terminal restoration

pub mod actions;
pub mod process;
pub mod runner;
pub mod terminal;

// Re-export main entry points
pub use runner::run;

// Re-export types used externally
pub use actions::{FetchSlot, JokeSource};
