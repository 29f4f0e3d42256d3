//! Slash command handler trait
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use super::context::CommandContext;
use super::invocation::Invocation;
use super::reply::Responder;

/// Trait for slash command handlers
///
/// Handlers are registered with a [`CommandRegistry`](super::CommandRegistry)
/// and dispatched by command name. A handler sends at most one reply through
/// the responder; errors it returns are absorbed by the registry.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl SlashCommandHandler for PingHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     async fn handle(
///         &self,
///         _ctx: Arc<CommandContext>,
///         _invocation: &Invocation,
///         responder: &dyn Responder,
///     ) -> Result<()> {
///         responder.reply(Reply::private("Pong!")).await
///     }
/// }
/// ```
#[async_trait]
pub trait SlashCommandHandler: Send + Sync {
    /// Command name(s) this handler processes
    fn command_names(&self) -> &'static [&'static str];

    /// Handle one invocation
    ///
    /// # Arguments
    ///
    /// * `ctx` - Shared read-only application context
    /// * `invocation` - Command name, invoking user and option values
    /// * `responder` - Reply capability for this interaction
    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        invocation: &Invocation,
        responder: &dyn Responder,
    ) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe (can be used with dyn)
    fn _assert_object_safe(_: &dyn SlashCommandHandler) {}
}
