//! Settings file loading and saving

use super::validation::{self, SettingKey};
use crate::constants::config::DEFAULT_VERSION_FILE;
use crate::constants::github::TOKEN_ENV_VAR;
use crate::gist::{GistClient, TracingLogger};
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Persistent settings of the sync tool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gist_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_proxy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub https_proxy: Option<String>,
    /// Local directory whose files are synced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    /// Glob patterns, relative to `directory`, never uploaded
    #[serde(default)]
    pub excluded_files: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_file: Option<String>,
}

impl Settings {
    /// Create empty settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a file
    ///
    /// A missing file yields default settings.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            tracing::debug!(path, "settings file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file '{}'", path))?;
        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file '{}'", path))?;

        for pattern in &settings.excluded_files {
            validation::validate_exclusion_pattern(pattern)?;
        }

        Ok(settings)
    }

    /// Save settings to a file
    pub fn save(&self, path: &str) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        let content = if yaml.starts_with("---") {
            yaml
        } else {
            format!("---\n{}", yaml)
        };

        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings file '{}'", path))?;
        Ok(())
    }

    /// Read a setting by key
    ///
    /// `excluded_files` is returned comma-separated.
    pub fn get(&self, key: SettingKey) -> Option<String> {
        match key {
            SettingKey::AccessToken => self.access_token.clone(),
            SettingKey::GistId => self.gist_id.clone(),
            SettingKey::HttpProxy => self.http_proxy.clone(),
            SettingKey::HttpsProxy => self.https_proxy.clone(),
            SettingKey::Directory => self.directory.clone(),
            SettingKey::ExcludedFiles => {
                if self.excluded_files.is_empty() {
                    None
                } else {
                    Some(self.excluded_files.join(","))
                }
            }
            SettingKey::VersionFile => self.version_file.clone(),
        }
    }

    /// Set or clear a setting
    ///
    /// `None` and empty strings clear the value. `excluded_files` accepts a
    /// comma-separated list of glob patterns.
    pub fn update(&mut self, key: SettingKey, value: Option<String>) -> Result<()> {
        let value = value.filter(|v| !v.trim().is_empty());

        match key {
            SettingKey::AccessToken => self.access_token = value,
            SettingKey::GistId => self.gist_id = value.map(|v| v.trim().to_string()),
            SettingKey::HttpProxy | SettingKey::HttpsProxy => {
                if let Some(v) = &value {
                    validation::check_proxy_setting(key, v);
                }
                if key == SettingKey::HttpProxy {
                    self.http_proxy = value;
                } else {
                    self.https_proxy = value;
                }
            }
            SettingKey::Directory => self.directory = value,
            SettingKey::ExcludedFiles => {
                let patterns: Vec<String> = value
                    .as_deref()
                    .unwrap_or_default()
                    .split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(String::from)
                    .collect();
                for pattern in &patterns {
                    validation::validate_exclusion_pattern(pattern)?;
                }
                self.excluded_files = patterns;
            }
            SettingKey::VersionFile => self.version_file = value,
        }

        Ok(())
    }

    /// Token from the settings, falling back to the `GITHUB_TOKEN` environment variable
    pub fn resolve_token(&self) -> Option<String> {
        self.access_token
            .clone()
            .filter(|t| !t.is_empty())
            .or_else(|| std::env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty()))
    }

    /// Build a Gist client from the configured token and proxies
    pub fn gist_client(&self) -> GistClient {
        GistClient::new(
            self.resolve_token(),
            self.http_proxy.clone(),
            self.https_proxy.clone(),
        )
        .with_logger(Arc::new(TracingLogger))
    }

    /// The configured gist id, or an error telling the user how to set one
    pub fn require_gist_id(&self) -> Result<&str> {
        self.gist_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "No gist_id configured. Run 'create --save' or set '{}' in the settings file.",
                    SettingKey::GistId
                )
            })
    }

    /// The synced directory, defaulting to the current directory
    pub fn directory_path(&self) -> PathBuf {
        PathBuf::from(self.directory.as_deref().unwrap_or("."))
    }

    /// Location of the local version metadata file
    ///
    /// Relative paths are resolved against the synced directory.
    pub fn version_file_path(&self) -> PathBuf {
        let file = self.version_file.as_deref().unwrap_or(DEFAULT_VERSION_FILE);
        let path = Path::new(file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.directory_path().join(path)
        }
    }
}
