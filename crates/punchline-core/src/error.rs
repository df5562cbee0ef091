//! Error types for punchline
//!
//! Central error enum shared by all crates in the workspace, plus the
//! `ResultExt` helpers for attaching context while logging.

use thiserror::Error;

/// Result alias used throughout the workspace
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    // ─────────────────────────────────────────────────────────
    // Common / Infrastructure
    // ─────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────
    // Terminal / TUI
    // ─────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────
    // Fetch
    // ─────────────────────────────────────────────────────────
    #[error("Fetch error: {message}")]
    Fetch { message: String },

    #[error("Invalid joke endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    // ─────────────────────────────────────────────────────────
    // Configuration
    // ─────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────
    // Channel / Communication
    // ─────────────────────────────────────────────────────────
    #[error("Channel closed: {context}")]
    ChannelClosed { context: String },
}

impl Error {
    /// Create a terminal error with a message
    pub fn terminal(message: impl Into<String>) -> Self {
        Error::Terminal {
            message: message.into(),
        }
    }

    /// Create a fetch error with a message
    pub fn fetch(message: impl Into<String>) -> Self {
        Error::Fetch {
            message: message.into(),
        }
    }

    /// Create an invalid-endpoint error
    pub fn invalid_endpoint(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidEndpoint {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with a message
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Create a channel-closed error with context
    pub fn channel_closed(context: impl Into<String>) -> Self {
        Error::ChannelClosed {
            context: context.into(),
        }
    }

    /// Whether the app can keep running after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Fetch { .. } | Error::InvalidEndpoint { .. } | Error::Config { .. }
        )
    }

    /// Whether this error should abort the app
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::TerminalInit(_) | Error::ChannelClosed { .. }
        )
    }
}

/// Extension trait for attaching context to results while logging the cause
pub trait ResultExt<T> {
    /// Replace the error with a terminal error carrying `context`,
    /// logging the original error first
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Like [`ResultExt::context`] but the message is built lazily
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|err| {
            let message = context.into();
            tracing::error!("{}: {:?}", message, err);
            Error::Terminal { message }
        })
    }

    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|err| {
            let message = f().into();
            tracing::error!("{}: {:?}", message, err);
            Error::Terminal { message }
        })
    }
}
