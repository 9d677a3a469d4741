//! Init command implementation

use super::{Command, CommandContext};
use crate::config::{SettingKey, Settings};
use crate::utils::ensure_directory_exists;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use std::path::Path;

/// Init command for writing a fresh settings file
pub struct InitCommand {
    /// Directory to sync; defaults to the current directory
    pub directory: Option<String>,
    pub overwrite: bool,
}

#[async_trait]
impl Command for InitCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        if Path::new(&context.settings_path).exists() && !self.overwrite {
            return Err(anyhow::anyhow!(
                "Settings file '{}' already exists. Use --overwrite to replace it.",
                context.settings_path
            ));
        }

        let mut settings = Settings::new();
        if let Some(directory) = &self.directory {
            ensure_directory_exists(Path::new(directory))?;
            settings.update(SettingKey::Directory, Some(directory.clone()))?;
        }

        context.save_settings(&settings)?;

        println!(
            "{}",
            format!("Settings saved to '{}'", context.settings_path).green()
        );
        println!(
            "Set '{}' (a token with the gist scope) or export GITHUB_TOKEN before uploading.",
            SettingKey::AccessToken
        );

        Ok(())
    }
}
