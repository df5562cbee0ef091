//! User configuration, loaded once at startup.

pub mod settings;
pub mod types;

pub use settings::{config_path, load_from, load_settings};
pub use types::{BehaviorSettings, NetworkSettings, Settings, UiSettings};
