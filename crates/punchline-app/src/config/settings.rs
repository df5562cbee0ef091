//! Locating and loading the configuration file.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::types::Settings;

const CONFIG_DIR: &str = "punchline";
const CONFIG_FILE: &str = "config.toml";

/// Platform config path, e.g. `~/.config/punchline/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load settings from the default location.
///
/// Every failure falls back to defaults so a broken config file never
/// keeps the application from starting.
pub fn load_settings() -> Settings {
    match config_path() {
        Some(path) => load_from(&path),
        None => {
            warn!("No config directory on this platform, using default settings");
            Settings::default()
        }
    }
}

/// Load settings from an explicit path.
pub fn load_from(path: &Path) -> Settings {
    if !path.exists() {
        debug!(path = %path.display(), "No config file found, using default settings");
        return Settings::default();
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Failed to read config file");
            return Settings::default();
        }
    };

    match toml::from_str(&contents) {
        Ok(settings) => {
            debug!(path = %path.display(), "Loaded settings");
            settings
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Failed to parse config file");
            Settings::default()
        }
    }
}
