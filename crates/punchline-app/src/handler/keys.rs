//! Key handlers for each UI mode
//!
//! Handlers translate keys into messages and never touch state; the
//! update function does the mutating.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Route a key to the handler for the active UI mode.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Feed => handle_key_feed(key),
        UiMode::Compose => handle_key_compose(key),
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
    }
}

fn handle_key_feed(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),

        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::Char('g') | InputKey::Home => Some(Message::ScrollToTop),
        InputKey::Char('G') | InputKey::End => Some(Message::ScrollToBottom),

        InputKey::Char('r') => Some(Message::StartRefresh),
        InputKey::Char('m') | InputKey::Enter => Some(Message::MailButtonPressed),
        InputKey::Char('c') => Some(Message::CancelRefresh),

        _ => None,
    }
}

fn handle_key_compose(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Esc | InputKey::Char('q') | InputKey::Enter => Some(Message::CloseCompose),
        _ => None,
    }
}

fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y') | InputKey::Char('Y') | InputKey::Char('q') | InputKey::Enter => {
            Some(Message::ConfirmQuit)
        }
        InputKey::Char('n') | InputKey::Char('N') | InputKey::Esc => Some(Message::CancelQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
