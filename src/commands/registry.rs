//! Command handler registry
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Dispatch with error absorption and the reply-once guard
//! - 1.0.0: Initial implementation for handler dispatch

use log::{debug, error};
use std::collections::HashMap;
use std::sync::Arc;

use super::context::CommandContext;
use super::handler::SlashCommandHandler;
use super::invocation::Invocation;
use super::reply::{Reply, Responder, GENERIC_ERROR_REPLY};

/// Registry mapping command names to handlers
///
/// Multiple command names can map to the same handler if they share logic.
///
/// # Example
///
/// ```ignore
/// let mut registry = CommandRegistry::new();
/// registry.register(Arc::new(SpawnHandler));
///
/// registry.dispatch(ctx, &invocation, &responder).await;
/// ```
#[derive(Clone)]
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Arc<dyn SlashCommandHandler>>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for its declared command names
    pub fn register(&mut self, handler: Arc<dyn SlashCommandHandler>) {
        for name in handler.command_names() {
            self.handlers.insert(name, Arc::clone(&handler));
        }
    }

    /// Get handler for a command name
    pub fn get(&self, name: &str) -> Option<Arc<dyn SlashCommandHandler>> {
        self.handlers.get(name).cloned()
    }

    /// Check if a command is registered
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Number of registered command names
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Route an invocation to its handler
    ///
    /// Unknown commands are ignored. Handler errors are logged and, if the
    /// interaction has not been answered yet, a single private error reply
    /// is sent. Nothing is propagated to the caller.
    pub async fn dispatch(
        &self,
        ctx: Arc<CommandContext>,
        invocation: &Invocation,
        responder: &dyn Responder,
    ) {
        let Some(handler) = self.get(&invocation.command_name) else {
            debug!("Ignoring unregistered command '{}'", invocation.command_name);
            return;
        };

        if let Err(e) = handler.handle(ctx, invocation, responder).await {
            error!("❌ Error executing /{}: {e}", invocation.command_name);

            if !responder.replied() {
                if let Err(why) = responder.reply(Reply::private(GENERIC_ERROR_REPLY)).await {
                    error!("Failed to send error reply: {why}");
                }
            }
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
