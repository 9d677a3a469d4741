//! Setting keys and their validation

use crate::gist::is_valid_proxy_url;
use anyhow::{Result, anyhow};
use std::fmt;
use std::str::FromStr;

/// Keys addressable through [`Settings::get`](super::Settings::get) and
/// [`Settings::update`](super::Settings::update)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    AccessToken,
    GistId,
    HttpProxy,
    HttpsProxy,
    Directory,
    ExcludedFiles,
    VersionFile,
}

impl SettingKey {
    pub const ALL: [SettingKey; 7] = [
        SettingKey::AccessToken,
        SettingKey::GistId,
        SettingKey::HttpProxy,
        SettingKey::HttpsProxy,
        SettingKey::Directory,
        SettingKey::ExcludedFiles,
        SettingKey::VersionFile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::AccessToken => "access_token",
            SettingKey::GistId => "gist_id",
            SettingKey::HttpProxy => "http_proxy",
            SettingKey::HttpsProxy => "https_proxy",
            SettingKey::Directory => "directory",
            SettingKey::ExcludedFiles => "excluded_files",
            SettingKey::VersionFile => "version_file",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        SettingKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = SettingKey::ALL.iter().map(|k| k.as_str()).collect();
                anyhow!("Unknown setting '{}'. Known settings: {}", s, known.join(", "))
            })
    }
}

/// Warn about proxy values that will be ignored at request time
///
/// Invalid proxies are accepted into the settings file; the client drops them
/// when building requests.
pub fn check_proxy_setting(key: SettingKey, value: &str) {
    if !value.is_empty() && !is_valid_proxy_url(value) {
        tracing::warn!(
            setting = key.as_str(),
            value,
            "proxy URL is not valid and will be ignored"
        );
    }
}

/// Validate a glob pattern used in `excluded_files`
pub fn validate_exclusion_pattern(pattern: &str) -> Result<()> {
    glob::Pattern::new(pattern)
        .map(|_| ())
        .map_err(|e| anyhow!("Invalid exclusion pattern '{}': {}", pattern, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip_through_str() {
        for key in SettingKey::ALL {
            assert_eq!(key.as_str().parse::<SettingKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_unknown_key_lists_known_keys() {
        let err = "token".parse::<SettingKey>().unwrap_err().to_string();
        assert!(err.contains("Unknown setting 'token'"));
        assert!(err.contains("access_token"));
    }

    #[test]
    fn test_validate_exclusion_pattern() {
        assert!(validate_exclusion_pattern("*.cache").is_ok());
        assert!(validate_exclusion_pattern("Package Control/**").is_ok());
        assert!(validate_exclusion_pattern("[").is_err());
    }
}
