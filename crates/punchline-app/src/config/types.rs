//! Configuration types loaded from `config.toml`.
//!
//! Every field carries a serde default so a partial file (or no file
//! at all) still produces a usable [`Settings`].

use serde::{Deserialize, Serialize};

/// Top-level settings, one section per concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,
    #[serde(default)]
    pub network: NetworkSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

/// The `[behavior]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorSettings {
    /// Ask for confirmation before `q` quits.
    #[serde(default = "default_confirm_quit")]
    pub confirm_quit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            confirm_quit: default_confirm_quit(),
        }
    }
}

fn default_confirm_quit() -> bool {
    true
}

/// The `[network]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSettings {
    /// Endpoint that answers `GET` with `{"joke": "..."}`.
    #[serde(default = "default_joke_url")]
    pub joke_url: String,
    /// Skip the network entirely and serve bundled jokes.
    #[serde(default)]
    pub offline: bool,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            joke_url: default_joke_url(),
            offline: false,
        }
    }
}

fn default_joke_url() -> String {
    "http://tambal.azurewebsites.net/joke/random".to_string()
}

/// The `[ui]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Prefix each joke in the feed with a random emoticon.
    #[serde(default = "default_show_emoticons")]
    pub show_emoticons: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_emoticons: default_show_emoticons(),
        }
    }
}

fn default_show_emoticons() -> bool {
    true
}
