//! Reaction listening session: a filtered, timeout-bounded event
//! subscription over the host's gateway loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{Notify, mpsc};
use tokio::time::{Duration, Instant, sleep_until};
use tracing::debug;

use crate::event::{ReactionEvent, ReactionFilter};

const EVENT_BUFFER: usize = 16;

/// Handle to an active listening session.
///
/// The host forwards gateway reaction events through [`process`]; the
/// session ends when its timeout elapses or [`stop`] is called, and cannot
/// be restarted.
///
/// [`process`]: ReactionCollector::process
/// [`stop`]: ReactionCollector::stop
#[derive(Debug)]
pub struct ReactionCollector {
    events: mpsc::Sender<ReactionEvent>,
    filter: ReactionFilter,
    stop: Arc<Notify>,
    ended: Arc<AtomicBool>,
}

impl ReactionCollector {
    /// Open a session, returning the host-facing handle and the event
    /// stream the session task consumes. The timeout deadline is fixed at
    /// open time.
    pub(crate) fn open(filter: ReactionFilter, timeout: Duration) -> (Self, EventStream) {
        let stop = Arc::new(Notify::new());
        let ended = Arc::new(AtomicBool::new(false));
        let (events, receiver) = mpsc::channel(EVENT_BUFFER);

        let stream = EventStream {
            events: receiver,
            stop: Arc::clone(&stop),
            ended: Arc::clone(&ended),
            deadline: Instant::now() + timeout,
        };

        (
            Self {
                events,
                filter,
                stop,
                ended,
            },
            stream,
        )
    }

    /// Feed a reaction event into the session.
    ///
    /// Returns whether the event qualified and was accepted. Non-qualifying
    /// events and events arriving after the session ended are dropped.
    pub fn process(&self, event: &ReactionEvent) -> bool {
        if self.is_ended() || !self.filter.qualifies(event) {
            return false;
        }

        self.events.try_send(event.clone()).is_ok()
    }

    /// Cancel the session before its timeout elapses.
    pub fn stop(&self) {
        self.stop.notify_one();
    }

    /// Whether the session has reached its terminal state.
    pub fn is_ended(&self) -> bool {
        self.ended.load(Ordering::SeqCst)
    }
}

/// Consuming side of a session, owned by the controller's session task.
#[derive(Debug)]
pub(crate) struct EventStream {
    events: mpsc::Receiver<ReactionEvent>,
    stop: Arc<Notify>,
    ended: Arc<AtomicBool>,
    deadline: Instant,
}

impl EventStream {
    /// Next qualifying event, or `None` once the session has ended.
    pub(crate) async fn next(&mut self) -> Option<ReactionEvent> {
        if self.ended.load(Ordering::SeqCst) {
            return None;
        }

        tokio::select! {
            _ = sleep_until(self.deadline) => {
                debug!("pagination session timed out");
                self.end()
            }
            _ = self.stop.notified() => {
                debug!("pagination session stopped");
                self.end()
            }
            event = self.events.recv() => match event {
                Some(event) => Some(event),
                None => self.end(),
            },
        }
    }

    fn end(&self) -> Option<ReactionEvent> {
        self.ended.store(true, Ordering::SeqCst);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emoji::default_nav_pair;
    use twilight_model::channel::message::EmojiReactionType;
    use twilight_model::id::Id;

    fn filter() -> ReactionFilter {
        ReactionFilter::new(Id::new(1), default_nav_pair())
    }

    fn qualifying_event() -> ReactionEvent {
        ReactionEvent {
            channel_id: Id::new(10),
            message_id: Id::new(1),
            user_id: Id::new(77),
            from_bot: false,
            emoji: EmojiReactionType::Unicode {
                name: "➡".to_owned(),
            },
        }
    }

    #[tokio::test(start_paused = true)]
    async fn accepted_events_reach_the_stream() {
        let (collector, mut stream) = ReactionCollector::open(filter(), Duration::from_secs(60));

        assert!(collector.process(&qualifying_event()));
        let received = stream.next().await.unwrap();
        assert_eq!(received.user_id, Id::new(77));
    }

    #[tokio::test(start_paused = true)]
    async fn bot_events_are_rejected() {
        let (collector, _stream) = ReactionCollector::open(filter(), Duration::from_secs(60));

        let mut event = qualifying_event();
        event.from_bot = true;
        assert!(!collector.process(&event));
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_ends_the_session_terminally() {
        let (collector, mut stream) = ReactionCollector::open(filter(), Duration::from_secs(60));

        assert!(stream.next().await.is_none());
        assert!(collector.is_ended());
        assert!(!collector.process(&qualifying_event()));
        assert!(stream.next().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_ends_the_session_before_timeout() {
        let (collector, mut stream) =
            ReactionCollector::open(filter(), Duration::from_secs(60 * 60));

        collector.stop();
        assert!(stream.next().await.is_none());
        assert!(collector.is_ended());
    }
}
