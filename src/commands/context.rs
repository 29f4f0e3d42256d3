//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use crate::core::Config;

/// Read-only application state handed to every command handler
///
/// Built once at startup and shared behind an `Arc`; nothing in here
/// changes while the bot runs.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// User ids mentioned by `/spawn`, in configured order
    pub recipients: Vec<String>,
    /// Settings file the recipients came from, quoted in error replies
    pub recipients_path: String,
}

impl CommandContext {
    pub fn new(recipients: Vec<String>, recipients_path: impl Into<String>) -> Self {
        Self {
            recipients,
            recipients_path: recipients_path.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.recipients.clone(), config.recipients_path.clone())
    }
}
