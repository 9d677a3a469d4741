//! Download command implementation

use super::{Command, CommandContext};
use crate::utils::{apply_files, ensure_directory_exists};
use crate::version::VersionInfo;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Download command: write the files of the configured gist locally
pub struct DownloadCommand;

#[async_trait]
impl Command for DownloadCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let settings = &context.settings;
        let gist_id = settings.require_gist_id()?;

        let gist = context.client.get(gist_id).await?;

        let directory = settings.directory_path();
        ensure_directory_exists(&directory)?;
        let written = apply_files(&directory, &gist, &context.protected_files())?;

        match VersionInfo::from_gist(&gist) {
            Ok(version) => version.write(&settings.version_file_path())?,
            Err(e) => tracing::warn!(error = %e, "could not record downloaded version"),
        }

        println!(
            "{} {} | {} files written to '{}'",
            "Gist downloaded:".green(),
            gist_id.cyan().bold(),
            written.len(),
            directory.display()
        );

        Ok(())
    }
}
