//! Quit confirmation dialog

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};
use crate::widgets::modal_overlay;

const DIALOG_WIDTH: u16 = 36;
const DIALOG_HEIGHT: u16 = 7;

#[derive(Default)]
pub struct ConfirmDialog;

impl ConfirmDialog {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for ConfirmDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let dialog = modal_overlay::centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        modal_overlay::render_shadow(buf, dialog);
        modal_overlay::clear_area(buf, dialog);

        let block = styles::modal_block("Quit");
        let inner = block.inner(dialog);
        block.render(dialog, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Length(1), // blank
            Constraint::Length(1), // question
            Constraint::Length(1), // blank
            Constraint::Length(1), // choices
        ])
        .split(inner);

        Paragraph::new(Span::styled(
            "Leave the jokes behind?",
            styles::text_primary().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

        let muted = Style::default().fg(palette::TEXT_MUTED);
        let key = Style::default().fg(palette::STATUS_YELLOW);
        let choices = Line::from(vec![
            Span::styled("[", muted),
            Span::styled("y", key),
            Span::styled("] Quit   ", muted),
            Span::styled("[", muted),
            Span::styled("n", key),
            Span::styled("] Stay", muted),
        ]);
        Paragraph::new(choices)
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
    }
}
