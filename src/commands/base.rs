//! Base types and traits for the command pattern

use crate::config::Settings;
use crate::gist::GistClient;
use anyhow::Result;
use std::path::PathBuf;

/// Context passed to all commands containing the loaded settings and the client built from them
#[derive(Clone, Debug)]
pub struct CommandContext {
    /// The loaded settings
    pub settings: Settings,
    /// Path the settings were loaded from, and are saved back to
    pub settings_path: String,
    /// Gist client configured from the settings
    pub client: GistClient,
}

impl CommandContext {
    pub fn new(settings: Settings, settings_path: String) -> Self {
        let client = settings.gist_client();
        Self {
            settings,
            settings_path,
            client,
        }
    }

    /// Replace the client, keeping the settings
    pub fn with_client(mut self, client: GistClient) -> Self {
        self.client = client;
        self
    }

    /// Files that must never be uploaded: the settings file (it may hold the
    /// token) and the version file
    pub fn protected_files(&self) -> Vec<PathBuf> {
        vec![
            PathBuf::from(&self.settings_path),
            self.settings.version_file_path(),
        ]
    }

    /// Persist a modified copy of the settings
    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        settings.save(&self.settings_path)
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
