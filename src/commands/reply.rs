//! Interaction replies
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Reply payload and responder capability, split out of the event handler

use anyhow::Result;
use async_trait::async_trait;
use serenity::builder::CreateInteractionResponse;
use serenity::http::Http;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::model::id::UserId;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Generic private reply sent when a handler fails before replying
pub const GENERIC_ERROR_REPLY: &str = "❌ Error al ejecutar el comando.";

/// The single message an invocation answers with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    /// Only the invoking user sees the reply
    pub ephemeral: bool,
    /// Users allowed to be notified; nothing else in `content` pings anyone
    pub allowed_users: Vec<UserId>,
}

impl Reply {
    /// Channel-visible reply notifying exactly `allowed_users`
    pub fn public(content: impl Into<String>, allowed_users: Vec<UserId>) -> Self {
        Self {
            content: content.into(),
            ephemeral: false,
            allowed_users,
        }
    }

    /// Reply visible only to the invoking user, with no mentions allowed
    pub fn private(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: true,
            allowed_users: Vec::new(),
        }
    }
}

/// Fill an interaction response with a reply
///
/// Mention parsing is disabled so only `allowed_users` can be pinged.
pub fn fill_response<'a, 'b>(
    response: &'b mut CreateInteractionResponse<'a>,
    reply: Reply,
) -> &'b mut CreateInteractionResponse<'a> {
    let Reply {
        content,
        ephemeral,
        allowed_users,
    } = reply;

    response
        .kind(InteractionResponseType::ChannelMessageWithSource)
        .interaction_response_data(|message| {
            message
                .content(content)
                .ephemeral(ephemeral)
                .allowed_mentions(|mentions| mentions.empty_parse().users(allowed_users))
        })
}

/// Capability to answer one interaction
#[async_trait]
pub trait Responder: Send + Sync {
    /// Send the reply for this interaction
    async fn reply(&self, reply: Reply) -> Result<()>;

    /// Whether a reply has already been accepted by the platform
    fn replied(&self) -> bool;
}

/// Responder backed by a serenity application command interaction
pub struct InteractionResponder<'a> {
    http: Arc<Http>,
    command: &'a ApplicationCommandInteraction,
    replied: AtomicBool,
}

impl<'a> InteractionResponder<'a> {
    pub fn new(http: Arc<Http>, command: &'a ApplicationCommandInteraction) -> Self {
        Self {
            http,
            command,
            replied: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl<'a> Responder for InteractionResponder<'a> {
    async fn reply(&self, reply: Reply) -> Result<()> {
        self.command
            .create_interaction_response(&self.http, |response| fill_response(response, reply))
            .await?;

        self.replied.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn replied(&self) -> bool {
        self.replied.load(Ordering::SeqCst)
    }
}
