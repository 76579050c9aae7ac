//! Emoji-reaction pagination for Discord embed messages.
//!
//! A [`PaginationController`] sends the first page of a pre-built embed set
//! to a channel, attaches a previous/next reaction pair, and edits the
//! message as allow-listed users react. The host application owns the
//! gateway connection and forwards reaction-add payloads into the active
//! session via [`ReactionCollector::process`]; when the session times out,
//! the controller clears the message's reactions.

/// Default timeout for reaction-based pagination sessions.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15 * 60;

/// Allow-list of users permitted to navigate.
pub mod allow;
/// Reaction listening sessions.
pub mod collector;
/// The pagination controller itself.
pub mod controller;
/// Navigation emoji configuration and matching.
pub mod emoji;
/// Reaction events and the session qualification filter.
pub mod event;
/// Pure index and page-window math.
pub mod page;
/// Chat transport capability and its twilight binding.
pub mod transport;
/// Embed builders for page sets.
pub mod view;

pub use allow::AllowList;
pub use collector::ReactionCollector;
pub use controller::{PaginationController, SessionState};
pub use emoji::{NavEmoji, default_nav_pair, normalize_nav_pair};
pub use event::{ReactionEvent, ReactionFilter};
pub use transport::{ChatTransport, SentMessage, TwilightTransport};
pub use view::{build_page_embed, build_page_set};
