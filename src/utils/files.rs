//! Collecting local files into gist payloads and writing gist files back

use super::sanitizers::{gist_name_to_path, path_to_gist_name};
use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use serde_json::{Map, Value, json};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Gist `files` mapping: `{ "<name>": { "content": "<text>" } }`
pub type GistFiles = Map<String, Value>;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Walk `directory` and read every uploadable file
///
/// # Arguments
/// * `directory` - Root of the synced files
/// * `excluded` - Glob patterns matched against paths relative to `directory`
/// * `skip` - Files never uploaded regardless of patterns (settings, version file)
///
/// Files that are empty or not valid UTF-8 are skipped with a warning, since
/// the Gist API only stores non-blank text.
pub fn collect_files(directory: &Path, excluded: &[String], skip: &[PathBuf]) -> Result<GistFiles> {
    let patterns = excluded
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid exclusion pattern '{}'", p)))
        .collect::<Result<Vec<_>>>()?;
    let skip: HashSet<PathBuf> = skip.iter().map(|p| normalize(p)).collect();

    let mut files = Map::new();

    for entry in WalkDir::new(directory)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if skip.contains(&normalize(path)) {
            continue;
        }

        let Ok(relative) = path.strip_prefix(directory) else {
            continue;
        };
        let relative_str = relative.to_string_lossy().replace('\\', "/");
        if patterns
            .iter()
            .any(|p| p.matches_with(&relative_str, MATCH_OPTIONS))
        {
            tracing::debug!(file = %relative_str, "excluded by pattern");
            continue;
        }

        let Some(name) = path_to_gist_name(relative) else {
            tracing::warn!(file = %relative_str, "skipping file with unsupported name");
            continue;
        };

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                tracing::warn!(file = %relative_str, "skipping non UTF-8 file");
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read '{}'", path.display()));
            }
        };
        if content.trim().is_empty() {
            tracing::warn!(file = %relative_str, "skipping empty file");
            continue;
        }

        files.insert(name, json!({ "content": content }));
    }

    Ok(files)
}

/// Build a create/update payload from collected files
pub fn build_payload(files: GistFiles, description: Option<&str>, public: Option<bool>) -> Value {
    let mut payload = Map::new();
    payload.insert("files".to_string(), Value::Object(files));
    if let Some(description) = description.filter(|d| !d.is_empty()) {
        payload.insert("description".to_string(), json!(description));
    }
    if let Some(public) = public {
        payload.insert("public".to_string(), json!(public));
    }
    Value::Object(payload)
}

/// Names present in the remote gist but missing locally
///
/// Mapping these to `null` in an update deletes them from the gist.
pub fn removed_files(remote: &Value, local: &GistFiles) -> Vec<String> {
    remote
        .get("files")
        .and_then(Value::as_object)
        .map(|files| {
            files
                .keys()
                .filter(|name| !local.contains_key(*name))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

/// Write the files of a gist response into `directory`
///
/// # Arguments
/// * `directory` - Root of the synced files
/// * `gist` - Decoded gist response
/// * `skip` - Local files never overwritten (settings, version file)
///
/// # Returns
/// The paths written. Files without inline content (truncated by the API),
/// names that would escape `directory` and protected files are skipped.
pub fn apply_files(directory: &Path, gist: &Value, skip: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let Some(files) = gist.get("files").and_then(Value::as_object) else {
        return Ok(Vec::new());
    };
    let skip: HashSet<PathBuf> = skip.iter().map(|p| normalize(p)).collect();

    let mut written = Vec::new();
    for (name, file) in files {
        if file.get("truncated").and_then(Value::as_bool) == Some(true) {
            tracing::warn!(file = %name, "skipping truncated gist file");
            continue;
        }
        let Some(content) = file.get("content").and_then(Value::as_str) else {
            tracing::warn!(file = %name, "gist file has no content");
            continue;
        };
        let Some(relative) = gist_name_to_path(name) else {
            tracing::warn!(file = %name, "skipping gist file with unsafe name");
            continue;
        };

        let target = directory.join(relative);
        if skip.contains(&normalize(&target)) {
            tracing::warn!(file = %name, "refusing to overwrite protected file");
            continue;
        }
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, content)
            .with_context(|| format!("Failed to write '{}'", target.display()))?;
        written.push(target);
    }

    Ok(written)
}

/// Canonical form of `path`, resolving through the parent when the file
/// itself does not exist yet
fn normalize(path: &Path) -> PathBuf {
    if let Ok(canonical) = std::fs::canonicalize(path) {
        return canonical;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => std::fs::canonicalize(parent)
            .map(|parent| parent.join(name))
            .unwrap_or_else(|_| path.to_path_buf()),
        _ => path.to_path_buf(),
    }
}
