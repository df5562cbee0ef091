//! Action handlers: UpdateAction dispatch and fetch task spawning

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tracing::{debug, warn};

use punchline_app::{Message, UpdateAction};
use punchline_core::Joke;
use punchline_fetch::{fetch_offline, JokeClient};

/// The single in-flight fetch task, if any
pub type FetchSlot = Arc<Mutex<Option<tokio::task::JoinHandle<()>>>>;

/// Where refreshes get their jokes
#[derive(Debug, Clone)]
pub enum JokeSource {
    /// GET against the configured endpoint
    Endpoint(JokeClient),
    /// Bundled pool, for offline mode
    Offline,
}

impl JokeSource {
    async fn fetch(&self) -> Option<Joke> {
        match self {
            JokeSource::Endpoint(client) => client.fetch().await,
            JokeSource::Offline => fetch_offline().await,
        }
    }
}

/// Execute an action by spawning or aborting the fetch task
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    source: JokeSource,
    fetch_task: FetchSlot,
) {
    match action {
        UpdateAction::StartFetch => spawn_fetch(msg_tx, source, fetch_task),
        UpdateAction::AbortFetch => abort_fetch(fetch_task),
    }
}

/// Spawn the fetch task and park its handle so a cancel can reach it.
/// The sequencer runs one cycle at a time, so a live handle here can
/// only be a task whose result message is still in the channel.
fn spawn_fetch(msg_tx: mpsc::Sender<Message>, source: JokeSource, fetch_task: FetchSlot) {
    let Ok(mut guard) = fetch_task.try_lock() else {
        warn!("fetch slot busy, dropping start");
        return;
    };

    if let Some(handle) = guard.as_ref() {
        if !handle.is_finished() {
            warn!("fetch already in flight, ignoring start");
            return;
        }
    }

    let handle = tokio::spawn(async move {
        let joke = source.fetch().await;
        if msg_tx.send(Message::JokeFetched { joke }).await.is_err() {
            debug!("main loop closed before the fetch result arrived");
        }
    });
    *guard = Some(handle);
}

/// Abort the in-flight fetch. The task dies before it can send its
/// result, so a cancelled cycle never sees a late completion.
fn abort_fetch(fetch_task: FetchSlot) {
    let Ok(mut guard) = fetch_task.try_lock() else {
        warn!("fetch slot busy, abort skipped");
        return;
    };

    if let Some(handle) = guard.take() {
        handle.abort();
        debug!("fetch task aborted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn slot() -> FetchSlot {
        Arc::new(Mutex::new(None))
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_fetch_delivers_a_joke() {
        let (tx, mut rx) = mpsc::channel::<Message>(8);
        let fetch_task = slot();

        handle_action(UpdateAction::StartFetch, tx, JokeSource::Offline, fetch_task);

        match rx.recv().await {
            Some(Message::JokeFetched { joke }) => assert!(joke.is_some()),
            other => panic!("expected JokeFetched, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_abort_suppresses_the_result() {
        let (tx, mut rx) = mpsc::channel::<Message>(8);
        let fetch_task = slot();

        handle_action(
            UpdateAction::StartFetch,
            tx.clone(),
            JokeSource::Offline,
            fetch_task.clone(),
        );
        handle_action(
            UpdateAction::AbortFetch,
            tx,
            JokeSource::Offline,
            fetch_task.clone(),
        );

        let result = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(
            !matches!(result, Ok(Some(_))),
            "aborted fetch must never answer"
        );
        assert!(fetch_task.lock().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_start_is_ignored_while_one_runs() {
        let (tx, mut rx) = mpsc::channel::<Message>(8);
        let fetch_task = slot();

        handle_action(
            UpdateAction::StartFetch,
            tx.clone(),
            JokeSource::Offline,
            fetch_task.clone(),
        );
        handle_action(UpdateAction::StartFetch, tx, JokeSource::Offline, fetch_task);

        assert!(matches!(
            rx.recv().await,
            Some(Message::JokeFetched { .. })
        ));
        let second = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(
            !matches!(second, Ok(Some(_))),
            "only one fetch should have been spawned"
        );
    }

    #[tokio::test]
    async fn test_abort_with_empty_slot_is_silent() {
        let (tx, _rx) = mpsc::channel::<Message>(1);
        let fetch_task = slot();

        handle_action(UpdateAction::AbortFetch, tx, JokeSource::Offline, fetch_task.clone());

        assert!(fetch_task.lock().await.is_none());
    }
}
