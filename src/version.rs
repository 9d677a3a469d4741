//! Local version metadata
//!
//! After a gist is created, uploaded or downloaded, the revision that the
//! local files correspond to is recorded as `{hash, created_at}`.

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Gist revision hash
    pub hash: String,
    pub created_at: DateTime<Utc>,
}

impl VersionInfo {
    pub fn new(hash: String, created_at: DateTime<Utc>) -> Self {
        Self { hash, created_at }
    }

    /// Extract the latest revision from a gist response (`history[0]`)
    pub fn from_gist(gist: &Value) -> Result<Self> {
        let commit = gist
            .get("history")
            .and_then(Value::as_array)
            .and_then(|history| history.first())
            .ok_or_else(|| anyhow!("Gist response has no history"))?;
        Self::from_commit(commit)
    }

    /// Build from one entry of a gist history or commit list
    pub fn from_commit(commit: &Value) -> Result<Self> {
        let hash = commit
            .get("version")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow!("Gist commit has no version"))?;
        let committed_at = commit
            .get("committed_at")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow!("Gist commit has no committed_at"))?;
        let created_at = DateTime::parse_from_rfc3339(committed_at)
            .with_context(|| format!("Invalid commit timestamp '{}'", committed_at))?
            .with_timezone(&Utc);

        Ok(Self::new(hash.to_string(), created_at))
    }

    /// Read the version file; `None` if it does not exist
    pub fn read(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read version file '{}'", path.display()))?;
        let info = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse version file '{}'", path.display()))?;
        Ok(Some(info))
    }

    /// Write the version file, creating parent directories as needed
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write version file '{}'", path.display()))?;
        tracing::debug!(hash = %self.hash, path = %path.display(), "version file updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn sample_gist() -> Value {
        json!({
            "id": "abc",
            "history": [
                {"version": "57a7f021a713b1c5a6a199b54cc514735d2d462f", "committed_at": "2010-04-14T02:15:15Z"},
                {"version": "older", "committed_at": "2010-04-13T02:15:15Z"}
            ]
        })
    }

    #[test]
    fn test_from_gist_takes_latest_commit() {
        let info = VersionInfo::from_gist(&sample_gist()).unwrap();
        assert_eq!(info.hash, "57a7f021a713b1c5a6a199b54cc514735d2d462f");
        assert_eq!(info.created_at.to_rfc3339(), "2010-04-14T02:15:15+00:00");
    }

    #[test]
    fn test_from_gist_without_history() {
        assert!(VersionInfo::from_gist(&json!({"id": "abc"})).is_err());
        assert!(VersionInfo::from_gist(&json!({"history": []})).is_err());
    }

    #[test]
    fn test_from_commit_rejects_bad_timestamp() {
        let err = VersionInfo::from_commit(&json!({"version": "x", "committed_at": "yesterday"}))
            .unwrap_err();
        assert!(err.to_string().contains("Invalid commit timestamp"));
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("version.json");

        assert!(VersionInfo::read(&path).unwrap().is_none());

        let info = VersionInfo::from_gist(&sample_gist()).unwrap();
        info.write(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"hash\""));
        assert!(content.contains("\"created_at\""));
        assert_eq!(VersionInfo::read(&path).unwrap(), Some(info));
    }
}
