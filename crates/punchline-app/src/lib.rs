//! # punchline-app - Application State & Update Loop
//!
//! The state machine behind the terminal UI: state goes in one side,
//! messages arrive from input sources, and a single update function
//! mutates the state and tells the event loop what to spawn or abort.
//! No terminal code lives here; the TUI crate translates raw input
//! into [`Message`]s and renders [`AppState`].
//!
//! ## Public API
//!
//! ### State (`state`)
//! - [`AppState`] - Everything the UI shows, plus derived geometry
//! - [`UiMode`] - Which surface owns key input
//!
//! ### Messages (`message`, `input_key`)
//! - [`Message`] - Every event the application reacts to
//! - [`InputKey`] - Backend-agnostic key representation
//!
//! ### Update (`handler`)
//! - [`update`] - The only place state changes
//! - [`UpdateAction`], [`UpdateResult`] - What the event loop does next
//!
//! ### Feed and scroll (`feed`, `scroll`)
//! - [`Feed`], [`JokeRow`] - The joke list and its grow-in animation
//! - [`ScrollModel`] - One scalar for collapse, scroll and pull
//!
//! ### Configuration (`config`)
//! - [`Settings`] - `config.toml` sections with full defaults
//! - [`load_settings`] - Warn-and-default loading

pub mod config;
pub mod feed;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod scroll;
pub mod state;

pub use config::{load_settings, Settings};
pub use feed::{Feed, JokeRow};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use scroll::ScrollModel;
pub use state::{AppState, UiMode};
