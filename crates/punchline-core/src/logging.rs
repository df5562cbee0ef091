//! Logging infrastructure
//!
//! File-based logging so output never collides with the TUI while it owns
//! the terminal. Logs roll daily under the OS data directory:
//! - Linux: `~/.local/share/punchline/logs/`
//! - macOS: `~/Library/Application Support/punchline/logs/`
//!
//! Filtering is controlled by the `PUNCHLINE_LOG` environment variable
//! (standard `tracing_subscriber::EnvFilter` syntax).

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{Error, Result};

const LOG_FILE_PREFIX: &str = "punchline.log";
const DEFAULT_FILTER: &str = "punchline=info,warn";

/// Initialize the global subscriber. Call once, before the TUI starts.
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    let env_filter = EnvFilter::try_from_env("PUNCHLINE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════");
    tracing::info!("punchline starting up");
    tracing::info!("log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════");

    Ok(())
}

fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir()
        .ok_or_else(|| Error::config("could not determine data directory"))?;
    Ok(base.join("punchline").join("logs"))
}

/// Path of today's log file, for display in error messages
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    let dated = format!("{}.{}", LOG_FILE_PREFIX, chrono::Local::now().format("%Y-%m-%d"));
    Ok(dir.join(dated))
}
