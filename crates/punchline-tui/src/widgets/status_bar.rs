//! Bottom status bar
//!
//! One row: key hints on the left (a transient notice replaces them
//! while it lasts), refresh phase and joke count on the right.

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use punchline_app::AppState;

use crate::theme::{palette, styles};

pub struct StatusBar<'a> {
    state: &'a AppState,
    now: Instant,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, now: Instant) -> Self {
        Self { state, now }
    }

    fn left_line(&self) -> Line<'static> {
        if let Some(text) = self.state.notice(self.now) {
            return Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    text.to_string(),
                    Style::default()
                        .fg(palette::STATUS_YELLOW)
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
        }

        let muted = Style::default().fg(palette::TEXT_MUTED);
        let key = Style::default().fg(palette::STATUS_YELLOW);
        Line::from(vec![
            Span::raw(" "),
            Span::styled("[", muted),
            Span::styled("j/k", key),
            Span::styled("] Scroll  ", muted),
            Span::styled("[", muted),
            Span::styled("r", key),
            Span::styled("] Refresh  ", muted),
            Span::styled("[", muted),
            Span::styled("m", key),
            Span::styled("] Send  ", muted),
            Span::styled("[", muted),
            Span::styled("q", key),
            Span::styled("] Quit", muted),
        ])
    }

    fn right_line(&self) -> Line<'static> {
        let mut spans = Vec::new();

        let phase = self.state.sequencer.phase();
        if !self.state.sequencer.is_idle() {
            let (icon, label, style) = styles::phase_indicator(phase);
            spans.push(Span::styled(icon, style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(label, style));
            spans.push(Span::raw("  "));
        }

        let count = self.state.feed.len();
        let noun = if count == 1 { "joke" } else { "jokes" };
        spans.push(Span::styled(
            format!("{count} {noun} "),
            Style::default().fg(palette::TEXT_MUTED),
        ));

        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let left = self.left_line();
        let left_width = left.width() as u16;
        buf.set_line(area.x, area.y, &left, area.width);

        let right = self.right_line();
        let right_width = right.width() as u16;
        if left_width + right_width + 2 <= area.width {
            let x = area.x + area.width - right_width;
            buf.set_line(x, area.y, &right, right_width);
        }
    }
}
