//! Centralized theme system for the paper-landscape TUI design.
//!
//! This module provides:
//! - `palette` — Raw color constants
//! - `styles` — Semantic style builders and color arithmetic

pub mod palette;
pub mod styles;
