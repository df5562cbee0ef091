//! Main render/view function (View in TEA pattern)


use std::time::Instant;

use ratatui::Frame;

use punchline_app::{AppState, UiMode};

use super::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure: reads state, draws widgets, mutates nothing.
pub fn view(frame: &mut Frame, state: &AppState) {
    view_at(frame, state, Instant::now());
}

/// [`view`] with an explicit clock, so tests can steer animations.
pub fn view_at(frame: &mut Frame, state: &AppState, now: Instant) {
    let area = frame.area();
    let areas = layout::create(area, state.header_rows(now));

    frame.render_widget(widgets::HeaderScene::new(state, now), areas.header);
    frame.render_widget(widgets::JokeFeed::new(state, now), areas.feed);
    frame.render_widget(widgets::StatusBar::new(state, now), areas.status);

    // Modal overlays draw over the whole frame, dimming what's behind
    match state.ui_mode {
        UiMode::Feed => {}
        UiMode::Compose => {
            frame.render_widget(widgets::ComposeDialog::new(state), area);
        }
        UiMode::ConfirmDialog => {
            frame.render_widget(widgets::ConfirmDialog::new(), area);
        }
    }
}
