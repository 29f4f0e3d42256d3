//! # Core Module
//!
//! Configuration, recipient settings and alert formatting.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add recipients module for the YAML settings file
//! - 1.0.0: Initial creation with config and alert modules

pub mod alert;
pub mod config;
pub mod recipients;

// Re-export commonly used items
pub use alert::{compose_alert, mention, mention_list, BANNER};
pub use config::{log_level_from_env, Config};
pub use recipients::{parse_user_id, parse_user_ids, RecipientsFile};
