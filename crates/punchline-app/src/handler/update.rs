//! Main update function - the only place state changes
//!
//! Messages go in; state mutations plus at most one follow-up message
//! and one action come out. The event loop drains follow-up messages
//! before rendering, so a key press and everything it causes land in
//! the same frame.

use std::time::Instant;

use punchline_core::{ButtonState, SequencerEvent};

use crate::message::Message;
use crate::state::{AppState, UiMode};

use super::{keys, UpdateAction, UpdateResult};

/// Process one message against the state.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    update_at(state, message, Instant::now())
}

/// [`update`] with an explicit clock, so tests can steer time.
pub(crate) fn update_at(state: &mut AppState, message: Message, now: Instant) -> UpdateResult {
    match message {
        Message::Key(key) => match keys::handle_key(state, key) {
            Some(follow_up) => UpdateResult::message(follow_up),
            None => UpdateResult::none(),
        },

        Message::Tick => tick(state, now),

        Message::Resize(cols, rows) => {
            state.resize(cols, rows);
            UpdateResult::none()
        }

        // ───── Scroll Messages ─────
        Message::ScrollUp => {
            state.scroll.scroll_up(now);
            UpdateResult::none()
        }

        Message::ScrollDown => {
            let max = state.max_scroll();
            state.scroll.scroll_down(max, now);
            UpdateResult::none()
        }

        Message::ScrollToTop => {
            state.scroll.to_top();
            UpdateResult::none()
        }

        Message::ScrollToBottom => {
            let max = state.max_scroll();
            state.scroll.to_bottom(max);
            UpdateResult::none()
        }

        // ───── Refresh Messages ─────
        Message::StartRefresh => {
            let frame = state.flight_frame(now);
            match state.sequencer.start_refresh(frame, now) {
                Some(event) => apply_sequencer_event(state, event, now),
                None => UpdateResult::none(),
            }
        }

        Message::CancelRefresh => match state.sequencer.cancel_refresh() {
            Some(event) => apply_sequencer_event(state, event, now),
            None => UpdateResult::none(),
        },

        Message::MailButtonPressed => {
            state.press_button(now);
            if state.button.is_loading() {
                UpdateResult::message(Message::CancelRefresh)
            } else {
                UpdateResult::message(Message::OpenCompose)
            }
        }

        Message::JokeFetched { joke } => {
            let frame = state.flight_frame(now);
            match state.sequencer.finish_refresh(joke, frame, now) {
                Some(event) => apply_sequencer_event(state, event, now),
                None => UpdateResult::none(),
            }
        }

        // ───── Overlay Messages ─────
        Message::OpenCompose => {
            state.ui_mode = UiMode::Compose;
            UpdateResult::none()
        }

        Message::CloseCompose => {
            if state.ui_mode == UiMode::Compose {
                state.ui_mode = UiMode::Feed;
            }
            UpdateResult::none()
        }

        // ───── Quit Messages ─────
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.force_quit();
            UpdateResult::none()
        }
    }
}

/// The animation clock. Finishes short-lived visuals, advances the
/// flight and detects a released pull. A tick produces at most one
/// result; anything it had to skip surfaces on the next tick, 50ms
/// later.
fn tick(state: &mut AppState, now: Instant) -> UpdateResult {
    state.tick_transients(now);

    let frame = state.flight_frame(now);
    let result = match state.sequencer.tick(frame, now) {
        Some(event) => apply_sequencer_event(state, event, now),
        None => UpdateResult::none(),
    };
    if result.message.is_some() || result.action.is_some() {
        return result;
    }

    if state.scroll.tick(state.layout, now) && state.sequencer.is_idle() {
        return UpdateResult::message(Message::StartRefresh);
    }

    UpdateResult::none()
}

/// Translate a sequencer boundary into the header chrome it drives.
fn apply_sequencer_event(
    state: &mut AppState,
    event: SequencerEvent,
    now: Instant,
) -> UpdateResult {
    match event {
        SequencerEvent::RefreshRequested => {
            state.button.set_state(ButtonState::Loading, true, now);
            state.parallax.arm_wiggle(now);
            UpdateResult::action(UpdateAction::StartFetch)
        }

        SequencerEvent::CancelRequested => {
            state.button.set_state(ButtonState::Default, true, now);
            UpdateResult::action(UpdateAction::AbortFetch)
        }

        SequencerEvent::GlideStarted => {
            // the close glyph fades out while the plane glides home
            state.button.show_close(false, true, now);
            UpdateResult::none()
        }

        SequencerEvent::Finished(joke) => {
            state.button.set_state(ButtonState::Default, false, now);
            match joke {
                Some(joke) => state.feed.insert_front(joke, now),
                None => state.set_notice("Couldn't fetch a new joke", now),
            }
            UpdateResult::none()
        }
    }
}
