//! Messages drive every state change in the application.
//!
//! Input sources (keyboard, tick timer, fetch tasks) produce messages,
//! the update loop consumes them. Nothing mutates [`crate::AppState`]
//! outside of [`crate::handler::update`].

use punchline_core::Joke;

use crate::input_key::InputKey;

/// Every event the application can react to.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A key press, already translated by the terminal layer.
    Key(InputKey),
    /// Animation clock, emitted roughly every 50ms.
    Tick,
    /// Terminal was resized to (columns, rows).
    Resize(u16, u16),

    // ───── Scroll Messages ─────
    /// Move the feed up one row, or pull the header once at the top.
    ScrollUp,
    /// Move the feed down one row, releasing any active pull.
    ScrollDown,
    /// Jump back to the top of the feed.
    ScrollToTop,
    /// Jump to the last joke in the feed.
    ScrollToBottom,

    // ───── Refresh Messages ─────
    /// Begin the refresh sequence: plane flies out, fetch starts.
    StartRefresh,
    /// Tear the refresh down mid-flight and abort the fetch.
    CancelRefresh,
    /// The mail button was activated (keyboard shortcut).
    MailButtonPressed,
    /// A fetch task finished; `None` means it failed or came back empty.
    JokeFetched { joke: Option<Joke> },

    // ───── Overlay Messages ─────
    /// Show the share overlay.
    OpenCompose,
    /// Dismiss the share overlay.
    CloseCompose,

    // ───── Quit Messages ─────
    /// User asked to leave; may open the confirmation dialog.
    RequestQuit,
    /// User confirmed the quit dialog.
    ConfirmQuit,
    /// User dismissed the quit dialog.
    CancelQuit,
    /// Shut down immediately, skipping confirmation.
    Quit,
}
