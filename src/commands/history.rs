//! History command implementation

use super::{Command, CommandContext};
use crate::version::VersionInfo;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use colored::*;
use serde_json::Value;

/// History command: list the revisions of the configured gist
pub struct HistoryCommand {
    /// Print the raw commit list as JSON
    pub json: bool,
}

#[async_trait]
impl Command for HistoryCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let settings = &context.settings;
        let gist_id = settings.require_gist_id()?;

        let commits = context.client.list_commits(gist_id).await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&commits)?);
            return Ok(());
        }

        let commits = commits
            .as_array()
            .ok_or_else(|| anyhow!("Unexpected commit list format"))?;
        if commits.is_empty() {
            println!("{}", "No revisions found".yellow());
            return Ok(());
        }

        let local = VersionInfo::read(&settings.version_file_path())?;

        for commit in commits {
            println!("{}", format_commit(commit, local.as_ref()));
        }

        Ok(())
    }
}

/// One line per revision: short hash, date, change counts and a marker for the local version
pub fn format_commit(commit: &Value, local: Option<&VersionInfo>) -> String {
    let version = commit.get("version").and_then(Value::as_str).unwrap_or("?");
    let short: String = version.chars().take(7).collect();
    let committed_at = commit
        .get("committed_at")
        .and_then(Value::as_str)
        .unwrap_or("unknown date");

    let change = commit.get("change_status");
    let count = |field: &str| {
        change
            .and_then(|c| c.get(field))
            .and_then(Value::as_u64)
            .unwrap_or(0)
    };

    let mut line = format!(
        "{} | {} | {} {}",
        short.cyan().bold(),
        committed_at,
        format!("+{}", count("additions")).green(),
        format!("-{}", count("deletions")).red()
    );
    if local.is_some_and(|l| l.hash == version) {
        line.push_str(&format!(" {}", "(local)".yellow()));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_format_commit() {
        colored::control::set_override(false);
        let commit = json!({
            "version": "57a7f021a713b1c5a6a199b54cc514735d2d462f",
            "committed_at": "2010-04-14T02:15:15Z",
            "change_status": {"additions": 180, "deletions": 0, "total": 180}
        });

        let line = format_commit(&commit, None);
        assert_eq!(line, "57a7f02 | 2010-04-14T02:15:15Z | +180 -0");

        let local = VersionInfo::new(
            "57a7f021a713b1c5a6a199b54cc514735d2d462f".to_string(),
            Utc::now(),
        );
        assert!(format_commit(&commit, Some(&local)).ends_with("(local)"));
    }

    #[test]
    fn test_format_commit_missing_fields() {
        colored::control::set_override(false);
        let line = format_commit(&json!({}), None);
        assert_eq!(line, "? | unknown date | +0 -0");
    }
}
