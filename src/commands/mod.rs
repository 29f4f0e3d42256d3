//! # Command System
//!
//! Slash command (/) definitions, registration and dispatch.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod context;
pub mod handler;
pub mod handlers;
pub mod invocation;
pub mod registry;
pub mod reply;
pub mod slash;

// Re-export handler infrastructure
pub use context::CommandContext;
pub use handler::SlashCommandHandler;
pub use handlers::create_registry;
pub use invocation::Invocation;
pub use registry::CommandRegistry;
pub use reply::{InteractionResponder, Reply, Responder, GENERIC_ERROR_REPLY};

// Re-export commonly used items from submodules
pub use slash::{
    create_slash_commands, register_global_commands, register_guild_commands, SPAWN_COMMAND,
};
