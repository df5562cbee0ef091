//! The landscape header widget.
//!
//! Thin [`Widget`] wrapper around the scene painter so the render layer
//! can place the scene with the rest of the frame.

use std::time::Instant;

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use punchline_app::AppState;

use crate::scene;

/// Scroll-driven parallax landscape with the send button and, during a
/// refresh, the detached plane.
pub struct HeaderScene<'a> {
    state: &'a AppState,
    now: Instant,
}

impl<'a> HeaderScene<'a> {
    pub fn new(state: &'a AppState, now: Instant) -> Self {
        Self { state, now }
    }
}

impl Widget for HeaderScene<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        scene::render_scene(self.state, self.now, area, buf);
    }
}
