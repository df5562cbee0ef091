//! Main TUI runner - entry point and event loop
//!
//! Contains the core application lifecycle:
//! - `run`: takes over the terminal and drives the application
//! - `run_loop`: renders frames and routes messages until quit

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};

use punchline_app::{AppState, Message, Settings};
use punchline_core::prelude::*;
use punchline_fetch::JokeClient;
use punchline_tui::{event, render};

use crate::app::signals;

use super::actions::{FetchSlot, JokeSource};
use super::{process, terminal};

/// Run the TUI application
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Build the joke source first so a bad endpoint fails while stderr
    // is still readable
    let source = if settings.network.offline {
        info!("offline mode, refreshes draw from the bundled pool");
        JokeSource::Offline
    } else {
        JokeSource::Endpoint(JokeClient::new(&settings.network.joke_url)?)
    };

    // Initialize terminal
    let mut term = ratatui::init();
    let size = term.size()?;

    let mut state = AppState::with_settings(settings, size.width, size.height);

    // Unified message channel (signal handler, fetch tasks)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    // The in-flight fetch task, shared with the abort path
    let fetch_task: FetchSlot = Arc::new(Mutex::new(None));

    // Run the main loop
    let result = run_loop(
        &mut term,
        &mut state,
        msg_rx,
        msg_tx,
        source,
        fetch_task.clone(),
    );

    // Abort a fetch that outlived the loop
    if let Ok(mut guard) = fetch_task.try_lock() {
        if let Some(handle) = guard.take() {
            handle.abort();
        }
    }

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    source: JokeSource,
    fetch_task: FetchSlot,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (signal handler, fetch results)
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx, &source, &fetch_task);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events; the poll timeout doubles as the
        // animation tick
        if let Some(message) = event::poll()? {
            process::process_message(state, message, &msg_tx, &source, &fetch_task);
        }
    }

    Ok(())
}
