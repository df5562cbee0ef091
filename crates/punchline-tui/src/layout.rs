//! Screen layout definitions for the TUI
//!
//! Provides the vertical split for the main UI, with a dynamic header
//! height driven by the scroll position.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Landscape header area (scene canvas + collapsed title bar)
    pub header: Rect,

    /// Joke feed area (scrolling list of fetched jokes)
    pub feed: Rect,

    /// Status bar (key hints and transient notices)
    pub status: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `header_rows` - Current header height in rows (scroll-driven)
pub fn create(area: Rect, header_rows: u16) -> ScreenAreas {
    // Layout: Header + Feed (remaining) + Status
    // The header grows while pulling and shrinks toward its collapsed
    // height while the feed scrolls, so its constraint is recomputed
    // every frame.
    let constraints = vec![
        Constraint::Length(header_rows), // Landscape scene
        Constraint::Min(1),              // Feed
        Constraint::Length(1),           // Status bar
    ];

    let chunks = Layout::vertical(constraints).split(area);

    ScreenAreas {
        header: chunks[0],
        feed: chunks[1],
        status: chunks[2],
    }
}
