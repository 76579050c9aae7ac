//! Reaction events forwarded from the host's gateway loop, and the filter
//! deciding which of them a session should see.

use twilight_model::channel::message::EmojiReactionType;
use twilight_model::gateway::payload::incoming::ReactionAdd;
use twilight_model::id::{
    Id,
    marker::{ChannelMarker, MessageMarker, UserMarker},
};

use crate::emoji::NavEmoji;

/// A reaction added to some message, as observed by the host application.
#[derive(Clone, Debug)]
pub struct ReactionEvent {
    pub channel_id: Id<ChannelMarker>,
    pub message_id: Id<MessageMarker>,
    pub user_id: Id<UserMarker>,
    /// Whether the reacting account is a bot. Unknown actors (no member data
    /// on the payload) are assumed human.
    pub from_bot: bool,
    pub emoji: EmojiReactionType,
}

impl ReactionEvent {
    /// Map a gateway reaction-add payload into a collector event.
    pub fn from_gateway(payload: &ReactionAdd) -> Self {
        Self {
            channel_id: payload.channel_id,
            message_id: payload.message_id,
            user_id: payload.user_id,
            from_bot: payload
                .member
                .as_ref()
                .is_some_and(|member| member.user.bot),
            emoji: payload.emoji.clone(),
        }
    }
}

/// Qualification filter for one pagination session.
///
/// An event qualifies when it targets the tracked message, its actor is not
/// a bot, and its emoji is one of the session's two navigation emojis.
#[derive(Clone, Debug)]
pub struct ReactionFilter {
    message_id: Id<MessageMarker>,
    pair: [NavEmoji; 2],
}

impl ReactionFilter {
    pub fn new(message_id: Id<MessageMarker>, pair: [NavEmoji; 2]) -> Self {
        Self { message_id, pair }
    }

    pub fn qualifies(&self, event: &ReactionEvent) -> bool {
        event.message_id == self.message_id
            && !event.from_bot
            && self.pair.iter().any(|emoji| emoji.matches(&event.emoji))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emoji::default_nav_pair;

    fn event(message_id: u64, from_bot: bool, emoji: &str) -> ReactionEvent {
        ReactionEvent {
            channel_id: Id::new(10),
            message_id: Id::new(message_id),
            user_id: Id::new(77),
            from_bot,
            emoji: EmojiReactionType::Unicode {
                name: emoji.to_owned(),
            },
        }
    }

    #[test]
    fn qualifies_on_tracked_message_with_nav_emoji() {
        let filter = ReactionFilter::new(Id::new(1), default_nav_pair());
        assert!(filter.qualifies(&event(1, false, "⬅")));
        assert!(filter.qualifies(&event(1, false, "➡")));
    }

    #[test]
    fn rejects_other_messages_bots_and_foreign_emojis() {
        let filter = ReactionFilter::new(Id::new(1), default_nav_pair());
        assert!(!filter.qualifies(&event(2, false, "⬅")));
        assert!(!filter.qualifies(&event(1, true, "⬅")));
        assert!(!filter.qualifies(&event(1, false, "🎉")));
    }
}
