//! Navigation emoji configuration, matching, and normalization.

use twilight_http::request::channel::reaction::RequestReactionType;
use twilight_model::channel::message::EmojiReactionType;
use twilight_model::id::{Id, marker::EmojiMarker};

/// An emoji configured as a navigation control on a paginated message.
///
/// Custom guild emojis are matched against incoming reactions by ID; unicode
/// emojis by name. Display names on custom emojis are carried only so the
/// reaction can be attached over HTTP.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavEmoji {
    Unicode(String),
    Custom {
        id: Id<EmojiMarker>,
        name: Option<String>,
    },
}

impl NavEmoji {
    /// Shorthand for a unicode navigation emoji.
    pub fn unicode(name: impl Into<String>) -> Self {
        Self::Unicode(name.into())
    }

    /// Shorthand for a custom guild navigation emoji.
    pub fn custom(id: u64, name: Option<&str>) -> Self {
        Self::Custom {
            id: Id::new(id),
            name: name.map(str::to_owned),
        }
    }

    /// Whether an incoming reaction emoji is this navigation emoji.
    pub fn matches(&self, reaction: &EmojiReactionType) -> bool {
        match (self, reaction) {
            (Self::Custom { id, .. }, EmojiReactionType::Custom { id: reacted_id, .. }) => {
                id == reacted_id
            }
            (Self::Unicode(name), EmojiReactionType::Unicode { name: reacted_name }) => {
                name == reacted_name
            }
            _ => false,
        }
    }

    /// Borrowed form accepted by twilight's reaction endpoints.
    pub fn as_request(&self) -> RequestReactionType<'_> {
        match self {
            Self::Unicode(name) => RequestReactionType::Unicode { name },
            Self::Custom { id, name } => RequestReactionType::Custom {
                id: *id,
                name: name.as_deref(),
            },
        }
    }
}

/// Borrowed request form for an emoji received in a reaction event.
pub fn reacted_emoji_request(emoji: &EmojiReactionType) -> RequestReactionType<'_> {
    match emoji {
        EmojiReactionType::Unicode { name } => RequestReactionType::Unicode { name },
        EmojiReactionType::Custom { id, name, .. } => RequestReactionType::Custom {
            id: *id,
            name: name.as_deref(),
        },
    }
}

/// The default previous/next pair.
pub fn default_nav_pair() -> [NavEmoji; 2] {
    [NavEmoji::unicode("⬅"), NavEmoji::unicode("➡")]
}

/// Normalize a configured emoji list into the effective previous/next pair.
///
/// Duplicates are dropped in order. Anything other than exactly two distinct
/// emojis silently falls back to the default pair.
pub fn normalize_nav_pair(configured: &[NavEmoji]) -> [NavEmoji; 2] {
    let mut distinct: Vec<&NavEmoji> = Vec::new();
    for emoji in configured {
        if !distinct.contains(&emoji) {
            distinct.push(emoji);
        }
    }

    match distinct.as_slice() {
        [previous, next] => [(*previous).clone(), (*next).clone()],
        _ => default_nav_pair(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_distinct_emojis_are_preserved() {
        let configured = [NavEmoji::unicode("🔼"), NavEmoji::unicode("🔽")];
        assert_eq!(normalize_nav_pair(&configured), configured);
    }

    #[test]
    fn duplicates_collapse_before_the_count_check() {
        let up = NavEmoji::unicode("🔼");
        let down = NavEmoji::unicode("🔽");
        let configured = [up.clone(), down.clone(), up.clone()];
        assert_eq!(normalize_nav_pair(&configured), [up, down]);
    }

    #[test]
    fn wrong_counts_fall_back_to_default() {
        assert_eq!(normalize_nav_pair(&[]), default_nav_pair());
        assert_eq!(
            normalize_nav_pair(&[NavEmoji::unicode("🔼")]),
            default_nav_pair()
        );
        assert_eq!(
            normalize_nav_pair(&[
                NavEmoji::unicode("1"),
                NavEmoji::unicode("2"),
                NavEmoji::unicode("3"),
            ]),
            default_nav_pair()
        );
    }

    #[test]
    fn all_duplicates_fall_back_to_default() {
        let same = NavEmoji::unicode("🔼");
        assert_eq!(
            normalize_nav_pair(&[same.clone(), same.clone()]),
            default_nav_pair()
        );
    }

    #[test]
    fn custom_emoji_matches_by_id_not_name() {
        let configured = NavEmoji::custom(42, Some("left"));

        assert!(configured.matches(&EmojiReactionType::Custom {
            animated: false,
            id: Id::new(42),
            name: Some("renamed".to_owned()),
        }));
        assert!(!configured.matches(&EmojiReactionType::Custom {
            animated: false,
            id: Id::new(43),
            name: Some("left".to_owned()),
        }));
        assert!(!configured.matches(&EmojiReactionType::Unicode {
            name: "left".to_owned(),
        }));
    }

    #[test]
    fn unicode_emoji_matches_by_name() {
        let configured = NavEmoji::unicode("⬅");

        assert!(configured.matches(&EmojiReactionType::Unicode {
            name: "⬅".to_owned(),
        }));
        assert!(!configured.matches(&EmojiReactionType::Unicode {
            name: "➡".to_owned(),
        }));
    }
}
