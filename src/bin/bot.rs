use anyhow::Result;
use dotenvy::dotenv;
use log::{debug, error, info, warn};
use serenity::async_trait;
use serenity::client::bridge::gateway::event::ShardStageUpdateEvent;
use serenity::gateway::ConnectionStage;
use serenity::model::application::interaction::Interaction;
use serenity::model::event::ResumedEvent;
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use std::sync::Arc;

use spawnbot::commands::{
    create_registry, register_global_commands, register_guild_commands, CommandContext,
    CommandRegistry, InteractionResponder, Invocation,
};
use spawnbot::core::{log_level_from_env, Config};

struct Handler {
    context: Arc<CommandContext>,
    registry: CommandRegistry,
    guild_id: Option<GuildId>,
}

impl Handler {
    fn new(context: CommandContext, registry: CommandRegistry, guild_id: Option<GuildId>) -> Self {
        Handler {
            context: Arc::new(context),
            registry,
            guild_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("✅ Bot connected as {}!", ready.user.tag());
        info!("📊 Guilds: {}", ready.guilds.len());
        info!(
            "👥 Recipients configured: {}",
            self.context.recipients.len()
        );

        if let Some(guild_id) = self.guild_id {
            info!("🔧 Registering commands for guild {guild_id}");
            if let Err(e) = register_guild_commands(&ctx.http, guild_id).await {
                error!("❌ Failed to register guild slash commands: {e}");
            } else {
                info!("✅ Slash commands registered for guild {guild_id} (instant update)");
            }
        } else {
            info!("🌍 Registering commands globally");
            if let Err(e) = register_global_commands(&ctx.http).await {
                error!("❌ Failed to register global slash commands: {e}");
            } else {
                info!("✅ Slash commands registered globally (may take up to 1 hour to propagate)");
            }
        }
    }

    async fn resume(&self, _ctx: Context, _resumed: ResumedEvent) {
        info!("🔁 Gateway session resumed");
    }

    async fn shard_stage_update(&self, _ctx: Context, event: ShardStageUpdateEvent) {
        match event.new {
            ConnectionStage::Disconnected | ConnectionStage::Resuming => {
                warn!(
                    "⚠️ Shard {} connection stage: {:?} -> {:?}",
                    event.shard_id.0, event.old, event.new
                );
            }
            _ => debug!(
                "Shard {} connection stage: {:?} -> {:?}",
                event.shard_id.0, event.old, event.new
            ),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::ApplicationCommand(command) = interaction else {
            return;
        };

        let invocation = Invocation::from_command(&command);
        let responder = InteractionResponder::new(ctx.http.clone(), &command);

        self.registry
            .dispatch(self.context.clone(), &invocation, &responder)
            .await;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level_from_env()))
        .init();

    let config = Config::from_env().map_err(|e| {
        error!("❌ {e}");
        e
    })?;
    config.log_summary();

    info!("🚀 Starting bot...");

    let handler = Handler::new(
        CommandContext::from_config(&config),
        create_registry(),
        config.guild_id.map(GuildId),
    );

    let intents = GatewayIntents::GUILDS;

    let mut client = Client::builder(&config.discord_token, intents)
        .application_id(config.application_id)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            error!("This could indicate:");
            error!("  - Invalid bot token format");
            error!("  - Network issues reaching Discord API");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    // Release the gateway connection on Ctrl-C; client.start() then returns Ok
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {e:?}");
            return;
        }

        info!("🔄 Shutting down bot...");
        shard_manager.lock().await.shutdown_all().await;
    });

    info!("Establishing WebSocket connection to Discord gateway...");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        error!("This could be due to:");
        error!("  - Invalid bot token");
        error!("  - Network connectivity issues");
        error!("  - Discord API outage");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    info!("Bot shutdown complete");
    Ok(())
}
