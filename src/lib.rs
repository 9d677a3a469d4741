//! Sync Settings - Back up and synchronize editor settings through a GitHub Gist

pub mod commands;
pub mod config;
pub mod constants;
pub mod gist;
pub mod utils;
pub mod version;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::{SettingKey, Settings};
pub use gist::{GistClient, GistError};
pub use version::VersionInfo;

/// Helper to load the settings from the default location
pub fn load_default_settings() -> anyhow::Result<Settings> {
    Settings::load(constants::config::DEFAULT_SETTINGS_FILE)
}
