//! Create command implementation

use super::{Command, CommandContext};
use crate::config::SettingKey;
use crate::constants::github::TOKEN_HELP_URL;
use crate::gist::GistError;
use crate::utils::{build_payload, collect_files};
use crate::version::VersionInfo;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use colored::*;
use serde_json::Value;

/// Create command: upload the local files as a new gist
pub struct CreateCommand {
    pub description: Option<String>,
    pub public: bool,
    /// Store the new gist id in the settings and record its version locally
    pub save: bool,
}

#[async_trait]
impl Command for CreateCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let settings = &context.settings;
        let files = collect_files(
            &settings.directory_path(),
            &settings.excluded_files,
            &context.protected_files(),
        )?;

        if files.is_empty() {
            println!("{}", "There are no files to upload".yellow());
            return Ok(());
        }

        println!(
            "{}",
            format!("Creating gist with {} files...", files.len()).green()
        );

        let payload = build_payload(files, self.description.as_deref(), Some(self.public));
        let gist = match context.client.create(&payload).await {
            Ok(gist) => gist,
            Err(GistError::NotFound) => {
                return Err(anyhow!(
                    "Apparently the token was not created with the gist scope enabled. \
                     Please check your token or create a new one. More info: {}",
                    TOKEN_HELP_URL
                ));
            }
            Err(e) => return Err(e.into()),
        };

        let gist_id = gist
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow!("Gist response has no id"))?;

        println!("{} {}", "Gist created:".green(), gist_id.cyan().bold());

        if self.save {
            let mut updated = settings.clone();
            updated.update(SettingKey::GistId, Some(gist_id.to_string()))?;
            context.save_settings(&updated)?;

            VersionInfo::from_gist(&gist)?.write(&settings.version_file_path())?;
            println!(
                "{}",
                format!("Saved gist id to '{}'", context.settings_path).green()
            );
        } else {
            println!(
                "Run with --save, or set '{}' in '{}', to sync with this gist.",
                SettingKey::GistId,
                context.settings_path
            );
        }

        Ok(())
    }
}
