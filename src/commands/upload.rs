//! Upload command implementation

use super::{Command, CommandContext};
use crate::utils::{build_payload, collect_files, removed_files};
use crate::version::VersionInfo;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use serde_json::Value;

/// Upload command: push the local files to the configured gist
///
/// Files that exist in the gist but no longer exist locally are removed from
/// the gist.
pub struct UploadCommand;

#[async_trait]
impl Command for UploadCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let settings = &context.settings;
        let gist_id = settings.require_gist_id()?;

        let mut files = collect_files(
            &settings.directory_path(),
            &settings.excluded_files,
            &context.protected_files(),
        )?;

        if files.is_empty() {
            println!("{}", "There are no files to upload".yellow());
            return Ok(());
        }

        let uploaded = files.len();
        let remote = context.client.get(gist_id).await?;
        let removed = removed_files(&remote, &files);
        for name in &removed {
            files.insert(name.clone(), Value::Null);
        }

        let gist = context
            .client
            .update(gist_id, &build_payload(files, None, None))
            .await?;

        VersionInfo::from_gist(&gist)?.write(&settings.version_file_path())?;

        println!(
            "{} {} | {} files uploaded, {} removed",
            "Gist updated:".green(),
            gist_id.cyan().bold(),
            uploaded,
            removed.len()
        );

        Ok(())
    }
}
