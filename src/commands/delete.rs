//! Delete command implementation

use super::{Command, CommandContext};
use crate::config::SettingKey;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Delete command: remove the configured gist
pub struct DeleteCommand {
    /// Keep `gist_id` and the version file after deleting
    ///
    /// They are always kept when the API does not confirm the deletion.
    pub keep_id: bool,
}

#[async_trait]
impl Command for DeleteCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let settings = &context.settings;
        let gist_id = settings.require_gist_id()?;

        let confirmed = context.client.delete(gist_id).await?;
        if !confirmed {
            println!(
                "{}",
                format!("Deletion of gist {} was not confirmed by the API", gist_id).yellow()
            );
            return Ok(());
        }
        println!("{} {}", "Gist deleted:".green(), gist_id.cyan().bold());

        if !self.keep_id {
            let mut updated = settings.clone();
            updated.update(SettingKey::GistId, None)?;
            context.save_settings(&updated)?;

            let version_file = settings.version_file_path();
            if version_file.exists() {
                std::fs::remove_file(&version_file)?;
            }
        }

        Ok(())
    }
}
