//! Message processing through the TEA update function

use tokio::sync::mpsc;

use punchline_app::{handler, AppState, Message};

use super::actions::{handle_action, FetchSlot, JokeSource};

/// Process a message through the TEA update function
///
/// Drains the follow-up chain, so a key press and everything it causes
/// land in the same frame.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    source: &JokeSource,
    fetch_task: &FetchSlot,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), source.clone(), fetch_task.clone());
        }

        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use punchline_app::{InputKey, UiMode};
    use tokio::sync::Mutex;

    fn slot() -> FetchSlot {
        Arc::new(Mutex::new(None))
    }

    #[tokio::test]
    async fn test_key_follow_ups_land_in_one_pass() {
        let mut state = AppState::new();
        let (tx, _rx) = mpsc::channel::<Message>(8);

        // 'm' becomes MailButtonPressed becomes OpenCompose
        process_message(
            &mut state,
            Message::Key(InputKey::Char('m')),
            &tx,
            &JokeSource::Offline,
            &slot(),
        );

        assert_eq!(state.ui_mode, UiMode::Compose);
        assert!(state.button.is_pressed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_spawns_fetch_and_result_comes_back() {
        let mut state = AppState::new();
        let (tx, mut rx) = mpsc::channel::<Message>(8);
        let fetch_task = slot();

        process_message(
            &mut state,
            Message::StartRefresh,
            &tx,
            &JokeSource::Offline,
            &fetch_task,
        );
        assert!(!state.sequencer.is_idle(), "flight should have launched");
        assert!(state.button.is_loading(), "button should show the cycle");

        // the spawned fetch answers on the message channel
        let msg = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("fetch should answer")
            .expect("channel open");
        assert!(matches!(msg, Message::JokeFetched { joke: Some(_) }));
    }

    #[tokio::test]
    async fn test_cancel_aborts_the_fetch_task() {
        let mut state = AppState::new();
        let (tx, _rx) = mpsc::channel::<Message>(8);
        let fetch_task = slot();

        process_message(
            &mut state,
            Message::StartRefresh,
            &tx,
            &JokeSource::Offline,
            &fetch_task,
        );
        assert!(fetch_task.lock().await.is_some());

        process_message(
            &mut state,
            Message::CancelRefresh,
            &tx,
            &JokeSource::Offline,
            &fetch_task,
        );
        assert!(fetch_task.lock().await.is_none(), "abort should clear the slot");
        assert!(state.sequencer.is_idle());
    }
}
