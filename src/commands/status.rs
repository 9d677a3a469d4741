//! Status command implementation

use super::{Command, CommandContext};
use crate::version::VersionInfo;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Status command: show the local sync configuration without contacting the API
pub struct StatusCommand;

#[async_trait]
impl Command for StatusCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let settings = &context.settings;
        let not_set = "not set".yellow().to_string();

        println!("{:<12} {}", "Settings:", context.settings_path);
        println!(
            "{:<12} {}",
            "Directory:",
            settings.directory_path().display()
        );
        println!(
            "{:<12} {}",
            "Gist:",
            settings
                .gist_id
                .as_deref()
                .map(|id| id.cyan().bold().to_string())
                .unwrap_or_else(|| not_set.clone())
        );
        println!(
            "{:<12} {}",
            "Token:",
            if context.client.is_authenticated() {
                "configured".green().to_string()
            } else {
                not_set.clone()
            }
        );

        let proxies = context.client.proxies();
        if proxies.is_empty() {
            println!("{:<12} none", "Proxies:");
        } else {
            for (scheme, url) in &proxies {
                println!("{:<12} {} -> {}", "Proxy:", scheme, url);
            }
        }

        match VersionInfo::read(&settings.version_file_path())? {
            Some(version) => println!(
                "{:<12} {} ({})",
                "Version:",
                version.hash,
                version.created_at.to_rfc3339()
            ),
            None => println!("{:<12} {}", "Version:", not_set),
        }

        Ok(())
    }
}
