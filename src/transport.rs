//! Chat transport capability and its twilight HTTP binding.

use std::sync::Arc;

use async_trait::async_trait;
use twilight_http::Client;
use twilight_http::error::ErrorType;
use twilight_model::channel::message::EmojiReactionType;
use twilight_model::channel::message::embed::Embed;
use twilight_model::id::{
    Id,
    marker::{ChannelMarker, MessageMarker, UserMarker},
};

use crate::emoji::{NavEmoji, reacted_emoji_request};

/// Handle to a message this library sent and may later edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SentMessage {
    pub channel_id: Id<ChannelMarker>,
    pub message_id: Id<MessageMarker>,
}

/// Message-send, edit, and reaction capabilities a pagination session needs.
///
/// Bound to twilight's HTTP client in production; tests substitute a
/// recording mock.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send a page to a channel, returning the handle of the created message.
    async fn send_page(
        &self,
        channel_id: Id<ChannelMarker>,
        page: &Embed,
    ) -> anyhow::Result<SentMessage>;

    /// Re-render a previously sent message with another page.
    async fn edit_page(&self, message: SentMessage, page: &Embed) -> anyhow::Result<()>;

    /// Attach a navigation reaction to the message as the bot user.
    async fn add_reaction(&self, message: SentMessage, emoji: &NavEmoji) -> anyhow::Result<()>;

    /// Retract one user's reaction from the message.
    async fn remove_user_reaction(
        &self,
        message: SentMessage,
        emoji: &EmojiReactionType,
        user_id: Id<UserMarker>,
    ) -> anyhow::Result<()>;

    /// Remove every reaction from the message.
    async fn remove_all_reactions(&self, message: SentMessage) -> anyhow::Result<()>;

    /// Whether the message still exists (has not been deleted).
    async fn message_exists(&self, message: SentMessage) -> anyhow::Result<bool>;
}

/// [`ChatTransport`] implementation over twilight's REST client.
#[derive(Clone)]
pub struct TwilightTransport {
    http: Arc<Client>,
}

impl TwilightTransport {
    pub fn new(http: Arc<Client>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ChatTransport for TwilightTransport {
    async fn send_page(
        &self,
        channel_id: Id<ChannelMarker>,
        page: &Embed,
    ) -> anyhow::Result<SentMessage> {
        let message = self
            .http
            .create_message(channel_id)
            .embeds(std::slice::from_ref(page))
            .await?
            .model()
            .await?;

        Ok(SentMessage {
            channel_id: message.channel_id,
            message_id: message.id,
        })
    }

    async fn edit_page(&self, message: SentMessage, page: &Embed) -> anyhow::Result<()> {
        self.http
            .update_message(message.channel_id, message.message_id)
            .embeds(Some(std::slice::from_ref(page)))
            .await?;

        Ok(())
    }

    async fn add_reaction(&self, message: SentMessage, emoji: &NavEmoji) -> anyhow::Result<()> {
        self.http
            .create_reaction(message.channel_id, message.message_id, &emoji.as_request())
            .await?;

        Ok(())
    }

    async fn remove_user_reaction(
        &self,
        message: SentMessage,
        emoji: &EmojiReactionType,
        user_id: Id<UserMarker>,
    ) -> anyhow::Result<()> {
        self.http
            .delete_reaction(
                message.channel_id,
                message.message_id,
                &reacted_emoji_request(emoji),
                user_id,
            )
            .await?;

        Ok(())
    }

    async fn remove_all_reactions(&self, message: SentMessage) -> anyhow::Result<()> {
        self.http
            .delete_all_reactions(message.channel_id, message.message_id)
            .await?;

        Ok(())
    }

    async fn message_exists(&self, message: SentMessage) -> anyhow::Result<bool> {
        match self
            .http
            .message(message.channel_id, message.message_id)
            .await
        {
            Ok(_) => Ok(true),
            Err(source) if is_not_found(&source) => Ok(false),
            Err(source) => Err(source.into()),
        }
    }
}

fn is_not_found(error: &twilight_http::Error) -> bool {
    matches!(error.kind(), ErrorType::Response { status, .. } if status.get() == 404)
}
