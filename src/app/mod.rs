//! Application layer - startup orchestration
//!
//! Installs the error and logging hooks, resolves settings against the
//! command line, and hands off to the TUI shell.

pub mod signals;

use punchline_app::load_settings;
use punchline_core::prelude::*;
use punchline_core::logging;

use crate::tui;

/// Command-line choices that override the config file.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Serve bundled jokes instead of calling the endpoint.
    pub offline: bool,
    /// Replacement joke endpoint.
    pub url: Option<String>,
}

/// Main application entry point
pub async fn run(options: RunOptions) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    logging::init()?;

    let mut settings = load_settings();
    if options.offline {
        settings.network.offline = true;
    }
    if let Some(url) = options.url {
        settings.network.joke_url = url;
    }

    info!(
        offline = settings.network.offline,
        endpoint = %settings.network.joke_url,
        "settings resolved"
    );

    let result = tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("punchline exiting");
    result
}
