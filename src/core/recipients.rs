//! # Recipient Settings
//!
//! Operator-edited YAML file listing the users the alert mentions.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.1.0

use anyhow::{anyhow, Result};
use log::{error, info, warn};
use serde::Deserialize;
use serenity::model::id::UserId;

/// Root of `recipients.yaml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipientsFile {
    #[serde(default)]
    pub recipients: Vec<String>,
}

impl RecipientsFile {
    /// Load the recipient list from a YAML file
    pub fn load(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse YAML contents, trimming entries and dropping blank ones
    pub fn parse(contents: &str) -> Result<Self> {
        let mut file: RecipientsFile = serde_yaml::from_str(contents)?;
        file.recipients = file
            .recipients
            .into_iter()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();
        Ok(file)
    }

    /// Load the list, falling back to an empty one
    ///
    /// An empty list is not fatal: `/spawn` answers with a configuration
    /// error until the file is fixed.
    pub fn load_or_empty(path: &str) -> Vec<String> {
        match Self::load(path) {
            Ok(file) => {
                info!("📄 Loaded {} recipients from {path}", file.recipients.len());
                for id in &file.recipients {
                    if parse_user_id(id).is_err() {
                        warn!("⚠️ Recipient '{id}' in {path} is not a valid user id");
                    }
                }
                file.recipients
            }
            Err(e) => {
                if std::path::Path::new(path).exists() {
                    error!("❌ Failed to load recipients from {path}: {e}");
                } else {
                    info!("📄 No recipients file found at {path} - no users will be mentioned");
                }
                Vec::new()
            }
        }
    }
}

/// Parse a configured id into a Discord user id
pub fn parse_user_id(raw: &str) -> Result<UserId> {
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(UserId(id)),
        _ => Err(anyhow!("Invalid recipient user id: '{raw}'")),
    }
}

/// Parse every configured id, failing on the first invalid one
pub fn parse_user_ids(raw: &[String]) -> Result<Vec<UserId>> {
    raw.iter().map(|id| parse_user_id(id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order_and_duplicates() {
        let file = RecipientsFile::parse("recipients:\n  - \"222\"\n  - \"111\"\n  - \"222\"\n").unwrap();
        assert_eq!(file.recipients, vec!["222", "111", "222"]);
    }

    #[test]
    fn test_parse_trims_and_drops_blank_entries() {
        let file = RecipientsFile::parse("recipients: [\" 111 \", \"\", \"  \"]").unwrap();
        assert_eq!(file.recipients, vec!["111"]);
    }

    #[test]
    fn test_parse_missing_key_is_empty() {
        let file = RecipientsFile::parse("{}").unwrap();
        assert!(file.recipients.is_empty());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        assert!(RecipientsFile::parse("recipients: [unclosed").is_err());
    }

    #[test]
    fn test_load_or_empty_missing_file() {
        let recipients = RecipientsFile::load_or_empty("/nonexistent/spawnbot/recipients.yaml");
        assert!(recipients.is_empty());
    }

    #[test]
    fn test_parse_user_ids() {
        let ids = parse_user_ids(&["111".to_string(), "222".to_string()]).unwrap();
        assert_eq!(ids, vec![UserId(111), UserId(222)]);

        assert!(parse_user_id("abc").is_err());
        assert!(parse_user_id("0").is_err());
        assert!(parse_user_ids(&["111".to_string(), "<@222>".to_string()]).is_err());
    }
}
