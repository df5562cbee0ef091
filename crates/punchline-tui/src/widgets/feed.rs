//! The joke feed widget.
//!
//! Renders the scrolling list below the header. Each entry takes four
//! rows: question, punchline, received time, separator. The scroll
//! offset is measured in rows so the top entry clips partially while
//! the header collapses, the same motion a pixel scroll would give.

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use punchline_app::{feed::JokeRow, AppState};

use crate::theme::styles;

pub struct JokeFeed<'a> {
    state: &'a AppState,
    now: Instant,
}

impl<'a> JokeFeed<'a> {
    pub fn new(state: &'a AppState, now: Instant) -> Self {
        Self { state, now }
    }

    /// The four display lines of one entry.
    fn row_lines(&self, row: &JokeRow, width: u16) -> Vec<Line<'static>> {
        let scale = row.scale(self.now);
        let show_emoticon = self.state.settings.ui.show_emoticons;

        if scale < 1.0 {
            // Grow-in: single-style lines clipped around their center,
            // so the row appears to scale open from the middle.
            let question = if show_emoticon {
                format!("{} {}", row.emoticon, row.joke.question)
            } else {
                row.joke.question.clone()
            };
            return [
                (question, styles::text_primary()),
                (format!("  {}", row.joke.answer), styles::text_secondary()),
                (
                    format!("  {}", row.received_at.format("%H:%M")),
                    styles::text_muted(),
                ),
                ("─".repeat(width as usize), styles::border_inactive()),
            ]
            .into_iter()
            .map(|(text, style)| {
                // Pad so the clip stays centered over the row's final
                // footprint and settles into place without a jump.
                let clipped = clip_centered(&text, scale);
                let pad = (text.width().saturating_sub(clipped.width())) / 2;
                Line::from(vec![
                    Span::raw(" ".repeat(pad)),
                    Span::styled(clipped, style),
                ])
            })
            .collect();
        }

        let mut question_spans = Vec::new();
        if show_emoticon {
            question_spans.push(Span::styled(row.emoticon, styles::accent()));
            question_spans.push(Span::raw(" "));
        }
        question_spans.push(Span::styled(
            row.joke.question.clone(),
            styles::text_primary().add_modifier(Modifier::BOLD),
        ));

        vec![
            Line::from(question_spans),
            Line::from(Span::styled(
                format!("  {}", row.joke.answer),
                styles::text_secondary(),
            )),
            Line::from(Span::styled(
                format!("  {}", row.received_at.format("%H:%M")),
                styles::text_muted(),
            )),
            Line::from(Span::styled(
                "─".repeat(width as usize),
                styles::border_inactive(),
            )),
        ]
    }
}

impl Widget for JokeFeed<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if self.state.feed.is_empty() {
            let message = "No jokes yet. Pull to fetch one.";
            let x = area.x + area.width.saturating_sub(message.len() as u16) / 2;
            let y = area.y + area.height / 2;
            buf.set_string(x, y, message, styles::text_muted());
            return;
        }

        let mut skip = self
            .state
            .scroll
            .feed_offset(self.state.layout, self.now) as usize;
        let mut y = area.top();

        'rows: for row in self.state.feed.rows() {
            for line in self.row_lines(row, area.width) {
                if skip > 0 {
                    skip -= 1;
                    continue;
                }
                if y >= area.bottom() {
                    break 'rows;
                }
                buf.set_line(area.x, y, &line, area.width);
                y += 1;
            }
        }
    }
}

/// Keep the middle `fraction` of a string, measured in display width.
fn clip_centered(text: &str, fraction: f32) -> String {
    if fraction >= 1.0 {
        return text.to_string();
    }
    let total = text.width();
    let target = (total as f32 * fraction.max(0.0)).round() as usize;
    if target == 0 {
        return String::new();
    }

    let skip = (total - target) / 2;
    let mut out = String::new();
    let mut pos = 0usize;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if pos >= skip && pos + w <= skip + target {
            out.push(ch);
        }
        pos += w;
        if pos >= skip + target {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use punchline_core::Joke;
    use ratatui::layout::Rect;

    fn feed_area() -> Rect {
        Rect::new(0, 0, 80, 14)
    }

    #[test]
    fn test_feed_renders_first_joke() {
        let mut term = TestTerminal::new();
        let state = AppState::new();

        term.render_widget(JokeFeed::new(&state, Instant::now()), feed_area());

        assert!(term.buffer_contains("What's red and bad for your teeth?"));
        assert!(term.buffer_contains("A Brick."));
    }

    #[test]
    fn test_feed_hides_emoticons_when_configured() {
        let mut term = TestTerminal::new();
        let mut state = AppState::new();
        state.settings.ui.show_emoticons = false;

        term.render_widget(JokeFeed::new(&state, Instant::now()), feed_area());

        for row in state.feed.rows() {
            assert!(!term.buffer_contains(row.emoticon));
        }
    }

    #[test]
    fn test_feed_scroll_offset_skips_rows() {
        let mut term = TestTerminal::new();
        let mut state = AppState::new();
        state.scroll.to_bottom(state.max_scroll());

        term.render_widget(JokeFeed::new(&state, Instant::now()), feed_area());

        // five rows scrolled past: the whole first entry and the second
        // entry's question are gone
        assert!(!term.buffer_contains("What's red and bad for your teeth?"));
        assert!(!term.buffer_contains("What do you call a chicken"));
        assert!(term.buffer_contains("Poultry in moton."));
    }

    #[test]
    fn test_growing_row_is_clipped() {
        let now = Instant::now();
        let mut term = TestTerminal::new();
        let mut state = AppState::new();
        state.settings.ui.show_emoticons = false;
        state
            .feed
            .insert_front(Joke::new("Q".repeat(40) + "?", "A."), now);

        // freshly inserted: scale 0.5, about half the question visible
        term.render_widget(JokeFeed::new(&state, now), feed_area());
        assert!(term.buffer_contains(&"Q".repeat(12)));
        assert!(!term.buffer_contains(&"Q".repeat(30)));

        // settled: the full question shows
        let later = now + std::time::Duration::from_secs(1);
        term.clear();
        term.render_widget(JokeFeed::new(&state, later), feed_area());
        assert!(term.buffer_contains(&("Q".repeat(40) + "?")));
    }

    #[test]
    fn test_empty_feed_shows_placeholder() {
        let mut term = TestTerminal::new();
        let mut state = AppState::new();
        state.feed = punchline_app::Feed::default();

        term.render_widget(JokeFeed::new(&state, Instant::now()), feed_area());

        assert!(term.buffer_contains("No jokes yet"));
    }

    #[test]
    fn test_clip_centered_keeps_middle() {
        assert_eq!(clip_centered("abcdef", 1.0), "abcdef");
        assert_eq!(clip_centered("abcdef", 0.5), "bcd");
        assert_eq!(clip_centered("abcdef", 0.0), "");
    }

    #[test]
    fn test_clip_centered_respects_wide_chars() {
        // emoji are two columns wide; a half clip keeps whole glyphs
        let clipped = clip_centered("😂😂😂😂", 0.5);
        assert_eq!(clipped.chars().count(), 2);
    }
}
