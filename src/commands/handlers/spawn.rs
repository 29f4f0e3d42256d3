//! Spawn alert handler
//!
//! Handles: spawn
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::invocation::Invocation;
use crate::commands::reply::{Reply, Responder};
use crate::commands::slash::{MENSAJE_OPTION, SPAWN_COMMAND, UBICACION_OPTION};
use crate::core::{compose_alert, parse_user_ids};

/// Handler for /spawn
pub struct SpawnHandler;

#[async_trait]
impl SlashCommandHandler for SpawnHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &[SPAWN_COMMAND]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        invocation: &Invocation,
        responder: &dyn Responder,
    ) -> Result<()> {
        info!("📢 /spawn executed by {}", invocation.user_tag);

        let mensaje = invocation.string_option(MENSAJE_OPTION).unwrap_or_default();
        let ubicacion = invocation.string_option(UBICACION_OPTION).unwrap_or_default();

        if ctx.recipients.is_empty() {
            let notice = format!(
                "❌ No hay usuarios configurados. Edita el archivo {}",
                ctx.recipients_path
            );
            return responder.reply(Reply::private(notice)).await;
        }

        let allowed_users = parse_user_ids(&ctx.recipients)?;
        let content = compose_alert(&ctx.recipients, mensaje, ubicacion);

        responder.reply(Reply::public(content, allowed_users)).await?;

        info!("✅ /spawn completed for {}", invocation.user_tag);
        Ok(())
    }
}
