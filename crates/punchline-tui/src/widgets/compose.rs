//! Share overlay
//!
//! A read-only preview of the mail the send button composes: the
//! newest joke under a fixed subject. Esc closes it.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget, Wrap},
};

use punchline_app::AppState;

use crate::theme::{palette, styles};
use crate::widgets::modal_overlay;

const DIALOG_WIDTH: u16 = 46;
const DIALOG_HEIGHT: u16 = 12;

pub struct ComposeDialog<'a> {
    state: &'a AppState,
}

impl<'a> ComposeDialog<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for ComposeDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let dialog = modal_overlay::centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        modal_overlay::render_shadow(buf, dialog);
        modal_overlay::clear_area(buf, dialog);

        let block = styles::modal_block("Share a joke");
        let inner = block.inner(dialog);
        block.render(dialog, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Length(1), // subject
            Constraint::Length(1), // blank
            Constraint::Min(1),    // joke body
            Constraint::Length(1), // footer
        ])
        .split(inner);

        let subject = Line::from(vec![
            Span::styled(" Subject: ", styles::text_muted()),
            Span::styled("A joke for you", styles::text_primary()),
        ]);
        buf.set_line(chunks[0].x, chunks[0].y, &subject, chunks[0].width);

        let body = match self.state.feed.rows().first() {
            Some(row) => Text::from(vec![
                Line::from(Span::styled(
                    row.joke.question.clone(),
                    styles::text_primary().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    row.joke.answer.clone(),
                    styles::text_secondary(),
                )),
            ]),
            None => Text::from(Span::styled(
                "Nothing to share yet.",
                styles::text_muted(),
            )),
        };
        Paragraph::new(body)
            .wrap(Wrap { trim: false })
            .render(chunks[2].inner(ratatui::layout::Margin::new(1, 0)), buf);

        let footer = Line::from(vec![
            Span::styled("[", Style::default().fg(palette::TEXT_MUTED)),
            Span::styled("Esc", Style::default().fg(palette::STATUS_YELLOW)),
            Span::styled("] Close", Style::default().fg(palette::TEXT_MUTED)),
        ]);
        Paragraph::new(footer)
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_compose_shows_newest_joke() {
        let mut term = TestTerminal::new();
        let state = AppState::new();

        term.render_widget(ComposeDialog::new(&state), term.area());

        assert!(
            term.buffer_contains("What's red and bad for your teeth?"),
            "Should preview the newest question"
        );
        assert!(
            term.buffer_contains("A Brick."),
            "Should preview the punchline"
        );
    }

    #[test]
    fn test_compose_shows_subject() {
        let mut term = TestTerminal::new();
        let state = AppState::new();

        term.render_widget(ComposeDialog::new(&state), term.area());

        assert!(term.buffer_contains("Share a joke"), "Should show the title");
        assert!(
            term.buffer_contains("A joke for you"),
            "Should show the fixed subject"
        );
    }

    #[test]
    fn test_compose_footer_hint() {
        let mut term = TestTerminal::new();
        let state = AppState::new();

        term.render_widget(ComposeDialog::new(&state), term.area());

        assert!(term.buffer_contains("[Esc] Close"), "Should show the close hint");
    }

    #[test]
    fn test_compose_with_empty_feed() {
        let mut term = TestTerminal::new();
        let mut state = AppState::new();
        state.feed = punchline_app::Feed::default();

        term.render_widget(ComposeDialog::new(&state), term.area());

        assert!(
            term.buffer_contains("Nothing to share yet."),
            "Should explain the empty preview"
        );
    }

    #[test]
    fn test_compose_dims_the_backdrop() {
        let mut term = TestTerminal::new();
        let state = AppState::new();

        term.render_widget(ComposeDialog::new(&state), term.area());

        let corner = term.buffer()[(0, 0)].style();
        assert_eq!(corner.bg, Some(palette::DIM_BG), "Backdrop should be dimmed");
    }
}
