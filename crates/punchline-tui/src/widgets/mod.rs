//! Custom widget components

mod compose;
mod confirm_dialog;
mod feed;
mod header;
pub mod modal_overlay;
mod status_bar;

pub use compose::ComposeDialog;
pub use confirm_dialog::ConfirmDialog;
pub use feed::JokeFeed;
pub use header::HeaderScene;
pub use status_bar::StatusBar;
