//! # Configuration
//!
//! Process-lifetime settings read once at startup.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Load recipients from a YAML settings file instead of a compiled-in list
//! - 1.0.0: Initial environment loader

use anyhow::{anyhow, Result};
use log::{info, warn};
use std::fmt;

use super::recipients::RecipientsFile;

/// Default location of the recipient settings file
pub const DEFAULT_RECIPIENTS_PATH: &str = "recipients.yaml";

/// Default log filter when neither `LOG_LEVEL` nor `RUST_LOG` is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Immutable bot configuration
#[derive(Clone)]
pub struct Config {
    pub discord_token: String,
    pub application_id: u64,
    /// Guild to scope command registration to; `None` registers globally
    pub guild_id: Option<u64>,
    pub recipients: Vec<String>,
    pub recipients_path: String,
}

impl Config {
    /// Build the configuration from the process environment
    ///
    /// The recipient list is read from `RECIPIENTS_CONFIG_PATH`
    /// (default `recipients.yaml`).
    pub fn from_env() -> Result<Self> {
        let mut config = Self::from_lookup(|key| std::env::var(key).ok())?;
        config.recipients = RecipientsFile::load_or_empty(&config.recipients_path);
        Ok(config)
    }

    /// Build the configuration from an arbitrary key lookup
    ///
    /// Recipients are left empty; callers fill them from the settings file.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let discord_token = non_empty("DISCORD_TOKEN");
        let client_id = non_empty("CLIENT_ID");

        let (discord_token, client_id) = match (discord_token, client_id) {
            (Some(token), Some(id)) => (token, id),
            _ => return Err(anyhow!("Missing DISCORD_TOKEN or CLIENT_ID in the environment or .env file")),
        };

        let application_id = client_id
            .trim()
            .parse::<u64>()
            .map_err(|_| anyhow!("CLIENT_ID must be a numeric application id, got '{client_id}'"))?;

        let guild_id = non_empty("GUILD_ID").and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(id) => Some(id),
            Err(_) => {
                warn!("⚠️ Ignoring GUILD_ID '{raw}': not a numeric guild id, registering globally");
                None
            }
        });

        Ok(Self {
            discord_token,
            application_id,
            guild_id,
            recipients: Vec::new(),
            recipients_path: non_empty("RECIPIENTS_CONFIG_PATH")
                .unwrap_or_else(|| DEFAULT_RECIPIENTS_PATH.to_string()),
        })
    }

    /// Log what was loaded without exposing the token
    pub fn log_summary(&self) {
        info!("🔍 Verifying configuration...");
        info!("Token loaded: yes (length: {})", self.discord_token.len());
        info!("Client ID loaded: {}", self.application_id);
        match self.guild_id {
            Some(guild_id) => info!("Command scope: guild {guild_id}"),
            None => info!("Command scope: global"),
        }
        info!(
            "Recipients configured: {} (from {})",
            self.recipients.len(),
            self.recipients_path
        );
    }
}

/// Log filter from `LOG_LEVEL`, read before the rest of the configuration
/// so startup failures are logged too
pub fn log_level_from_env() -> String {
    std::env::var("LOG_LEVEL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field(
                "discord_token",
                &format_args!("<redacted, {} chars>", self.discord_token.len()),
            )
            .field("application_id", &self.application_id)
            .field("guild_id", &self.guild_id)
            .field("recipients", &self.recipients)
            .field("recipients_path", &self.recipients_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_minimal_config() {
        let config =
            Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "abc.def"), ("CLIENT_ID", "42")]))
                .unwrap();
        assert_eq!(config.discord_token, "abc.def");
        assert_eq!(config.application_id, 42);
        assert_eq!(config.guild_id, None);
        assert!(config.recipients.is_empty());
        assert_eq!(config.recipients_path, DEFAULT_RECIPIENTS_PATH);
    }

    #[test]
    fn test_missing_token_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[("CLIENT_ID", "42")])).unwrap_err();
        assert!(err.to_string().contains("DISCORD_TOKEN"));
    }

    #[test]
    fn test_empty_token_is_fatal() {
        let result = Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "  "), ("CLIENT_ID", "42")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_client_id_is_fatal() {
        let result = Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "abc")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_non_numeric_client_id_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "abc"), ("CLIENT_ID", "bot")]))
            .unwrap_err();
        assert!(err.to_string().contains("CLIENT_ID"));
    }

    #[test]
    fn test_guild_scope() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("CLIENT_ID", "42"),
            ("GUILD_ID", "1234"),
        ]))
        .unwrap();
        assert_eq!(config.guild_id, Some(1234));
    }

    #[test]
    fn test_empty_or_invalid_guild_falls_back_to_global() {
        for raw in ["", "not-a-guild"] {
            let config = Config::from_lookup(lookup_from(&[
                ("DISCORD_TOKEN", "abc"),
                ("CLIENT_ID", "42"),
                ("GUILD_ID", raw),
            ]))
            .unwrap();
            assert_eq!(config.guild_id, None, "GUILD_ID={raw:?}");
        }
    }

    #[test]
    fn test_recipients_path_override() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("CLIENT_ID", "42"),
            ("RECIPIENTS_CONFIG_PATH", "/etc/spawnbot/recipients.yaml"),
        ]))
        .unwrap();
        assert_eq!(config.recipients_path, "/etc/spawnbot/recipients.yaml");
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "super-secret-token"),
            ("CLIENT_ID", "42"),
        ]))
        .unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret-token"));
        assert!(debug.contains("<redacted, 18 chars>"));
    }
}
