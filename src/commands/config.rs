//! Config command implementation

use super::{Command, CommandContext};
use crate::config::SettingKey;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Config command: read or change a single setting
pub struct ConfigCommand {
    /// Setting name, e.g. `gist_id` or `excluded_files`
    pub key: String,
    /// New value; the current one is printed when absent
    pub value: Option<String>,
    /// Clear the setting
    pub unset: bool,
}

#[async_trait]
impl Command for ConfigCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let key: SettingKey = self.key.parse()?;

        if self.value.is_none() && !self.unset {
            match context.settings.get(key) {
                Some(value) => println!("{}", display_value(key, &value)),
                None => println!("{}", "not set".yellow()),
            }
            return Ok(());
        }

        let mut updated = context.settings.clone();
        let value = if self.unset { None } else { self.value.clone() };
        updated.update(key, value)?;
        context.save_settings(&updated)?;

        match updated.get(key) {
            Some(value) => println!(
                "{} {} = {}",
                "Updated".green(),
                key.to_string().cyan(),
                display_value(key, &value)
            ),
            None => println!("{} {}", "Cleared".green(), key.to_string().cyan()),
        }

        Ok(())
    }
}

/// Tokens are never echoed in full
fn display_value(key: SettingKey, value: &str) -> String {
    if key != SettingKey::AccessToken {
        return value.to_string();
    }
    let visible: String = value.chars().take(4).collect();
    format!("{}****", visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value_masks_token() {
        assert_eq!(display_value(SettingKey::AccessToken, "ghp_abcdef123"), "ghp_****");
        assert_eq!(display_value(SettingKey::GistId, "abc"), "abc");
    }
}
