//! The pagination controller: one instance per paginated message.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::bail;
use tokio::time::Duration;
use tracing::{debug, error};
use twilight_model::channel::message::embed::Embed;
use twilight_model::id::{
    Id,
    marker::{ChannelMarker, UserMarker},
};

use crate::DEFAULT_TIMEOUT_SECS;
use crate::allow::AllowList;
use crate::collector::{EventStream, ReactionCollector};
use crate::emoji::{NavEmoji, normalize_nav_pair};
use crate::event::ReactionFilter;
use crate::page::{NavDirection, step_index};
use crate::transport::{ChatTransport, SentMessage};

/// Lifecycle of a pagination session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No message has been sent yet.
    Idle,
    /// A message is live and reactions are being collected.
    Listening,
    /// The session timed out or was stopped; terminal.
    Ended,
}

/// Reaction-driven pagination over a fixed set of pre-built embed pages.
///
/// One controller drives one sent message. Calling [`send_pagination`] again
/// opens a fresh session against a new message and abandons the previous
/// handle; use a fresh controller per message in practice.
///
/// [`send_pagination`]: PaginationController::send_pagination
pub struct PaginationController<T> {
    transport: Arc<T>,
    pages: Arc<[Embed]>,
    nav_emojis: Vec<NavEmoji>,
    timeout: Duration,
    allowed: Arc<Mutex<AllowList>>,
    current: Arc<AtomicUsize>,
    collector: Option<ReactionCollector>,
}

impl<T> PaginationController<T>
where
    T: ChatTransport + 'static,
{
    /// Create a controller over a page set with the default navigation pair
    /// and timeout.
    pub fn new(transport: Arc<T>, pages: Vec<Embed>) -> Self {
        Self {
            transport,
            pages: pages.into(),
            nav_emojis: Vec::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            allowed: Arc::new(Mutex::new(AllowList::new())),
            current: Arc::new(AtomicUsize::new(0)),
            collector: None,
        }
    }

    /// Override the previous/next emoji pair.
    ///
    /// Anything other than exactly two distinct emojis silently falls back
    /// to the default pair at send time.
    pub fn nav_emojis(mut self, emojis: Vec<NavEmoji>) -> Self {
        self.nav_emojis = emojis;
        self
    }

    /// Override the listening-session timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send the current page to a channel and start collecting navigation
    /// reactions on it.
    ///
    /// Errors from the initial send and from attaching the navigation
    /// reactions propagate to the caller; failures inside the session task
    /// are logged and do not end the session.
    pub async fn send_pagination(
        &mut self,
        channel_id: Id<ChannelMarker>,
    ) -> anyhow::Result<SentMessage> {
        if self.pages.is_empty() {
            bail!("cannot paginate an empty page set");
        }

        let pair = normalize_nav_pair(&self.nav_emojis);
        self.nav_emojis = pair.to_vec();

        let index = self.current.load(Ordering::SeqCst);
        let message = self.transport.send_page(channel_id, &self.pages[index]).await?;

        let filter = ReactionFilter::new(message.message_id, pair.clone());
        let (collector, events) = ReactionCollector::open(filter, self.timeout);

        for emoji in &pair {
            self.transport.add_reaction(message, emoji).await?;
        }

        debug!(
            message_id = message.message_id.get(),
            pages = self.pages.len(),
            "pagination session opened"
        );

        tokio::spawn(run_session(
            Arc::clone(&self.transport),
            Arc::clone(&self.pages),
            Arc::clone(&self.allowed),
            Arc::clone(&self.current),
            pair,
            message,
            events,
        ));

        self.collector = Some(collector);

        Ok(message)
    }

    /// Membership test by user identity.
    pub fn has_allowed_user(&self, user_id: Id<UserMarker>) -> bool {
        self.allowed().contains(user_id)
    }

    /// Permit a user to navigate. Idempotent; chainable.
    pub fn add_allowed_user(&mut self, user_id: Id<UserMarker>) -> &mut Self {
        self.allowed().add(user_id);
        self
    }

    /// Permit every user in the collection to navigate. Chainable.
    pub fn add_allowed_users(
        &mut self,
        user_ids: impl IntoIterator<Item = Id<UserMarker>>,
    ) -> &mut Self {
        self.allowed().add_all(user_ids);
        self
    }

    /// Revoke a user's navigation permission. Chainable.
    pub fn remove_allowed_user(&mut self, user_id: Id<UserMarker>) -> &mut Self {
        self.allowed().remove(user_id);
        self
    }

    /// Revoke navigation permission for every user in the collection.
    pub fn remove_allowed_users(
        &mut self,
        user_ids: impl IntoIterator<Item = Id<UserMarker>>,
    ) -> &mut Self {
        self.allowed().remove_all(user_ids);
        self
    }

    /// Snapshot of the current allow-list.
    pub fn allowed_users(&self) -> Vec<Id<UserMarker>> {
        self.allowed().snapshot()
    }

    /// The active session handle, for external control such as manual
    /// cancellation. `None` before the first send.
    pub fn collector(&self) -> Option<&ReactionCollector> {
        self.collector.as_ref()
    }

    /// Current 0-based page index.
    pub fn current_page(&self) -> usize {
        self.current.load(Ordering::SeqCst)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Lifecycle state of the most recent session.
    pub fn session_state(&self) -> SessionState {
        match &self.collector {
            None => SessionState::Idle,
            Some(collector) if collector.is_ended() => SessionState::Ended,
            Some(_) => SessionState::Listening,
        }
    }

    fn allowed(&self) -> MutexGuard<'_, AllowList> {
        self.allowed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Session task: consume qualifying events until the session ends, then
/// clear reactions if the message is still around.
async fn run_session<T: ChatTransport>(
    transport: Arc<T>,
    pages: Arc<[Embed]>,
    allowed: Arc<Mutex<AllowList>>,
    current: Arc<AtomicUsize>,
    pair: [NavEmoji; 2],
    message: SentMessage,
    mut events: EventStream,
) {
    while let Some(event) = events.next().await {
        if let Err(source) = transport
            .remove_user_reaction(message, &event.emoji, event.user_id)
            .await
        {
            error!(?source, "failed to retract navigation reaction");
        }

        let actor_allowed = allowed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains(event.user_id);
        if !actor_allowed {
            continue;
        }

        let direction = if pair[0].matches(&event.emoji) {
            NavDirection::Previous
        } else {
            NavDirection::Next
        };

        let old_index = current.load(Ordering::SeqCst);
        let new_index = step_index(old_index, pages.len(), direction);
        if new_index == old_index {
            continue;
        }

        current.store(new_index, Ordering::SeqCst);
        debug!(page = new_index, "pagination page changed");

        if let Err(source) = transport.edit_page(message, &pages[new_index]).await {
            error!(?source, "failed to render page");
        }
    }

    match transport.message_exists(message).await {
        Ok(true) => {
            if let Err(source) = transport.remove_all_reactions(message).await {
                error!(?source, "failed to clear reactions after session end");
            }
        }
        Ok(false) => {}
        Err(source) => error!(?source, "failed to check message before reaction cleanup"),
    }

    debug!(message_id = message.message_id.get(), "pagination session ended");
}
