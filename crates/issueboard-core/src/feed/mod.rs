//! Realtime change feed for the issue table.
//!
//! The schema installs a trigger that publishes on a NOTIFY channel after
//! every insert, update or delete (see `sql/schema.sql`). [`ChangeFeed`]
//! listens on that channel and queues each notification for the UI thread
//! to drain. Payloads are opaque: any event means "something changed,
//! re-read the table", never a delta to apply.
//!
//! The feed is an acquired resource scoped to the dashboard's lifetime:
//! [`ChangeFeed::subscribe`] opens it, [`ChangeFeed::close`] (or `Drop`)
//! releases it exactly once. A listener failure after subscribe ends the
//! feed; there is no reconnect.

use sqlx::postgres::{PgListener, PgPool};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use tracing::{debug, info, warn};

use crate::errors::FeedError;

/// One change notification, payload uninspected.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub channel: String,
    pub payload: String,
}

/// Live subscription to the issue table's NOTIFY channel.
///
/// The listener runs on the tokio runtime; events cross into the UI
/// thread through a std mpsc queue polled via
/// [`ChangeFeed::has_pending_events`].
pub struct ChangeFeed {
    events: Receiver<ChangeEvent>,
    listener_task: tokio::task::JoinHandle<()>,
    closed: bool,
}

impl ChangeFeed {
    /// Open a listener on `channel` and start forwarding notifications.
    ///
    /// Must be called from within a tokio runtime; the forwarding task is
    /// spawned there.
    pub async fn subscribe(pool: PgPool, channel: &str) -> Result<Self, FeedError> {
        let mut listener = PgListener::connect_with(&pool)
            .await
            .map_err(|e| FeedError::Connect { source: e })?;

        listener
            .listen(channel)
            .await
            .map_err(|e| FeedError::Listen {
                channel: channel.to_string(),
                source: e,
            })?;

        info!(event = "core.feed.subscribed", channel = channel);

        let (tx, rx) = std::sync::mpsc::channel();
        let listener_task = tokio::spawn(forward_notifications(listener, tx));

        Ok(Self {
            events: rx,
            listener_task,
            closed: false,
        })
    }

    /// Drain queued change events, reporting whether any arrived.
    ///
    /// A burst of notifications collapses into one `true`, so one poll
    /// tick triggers at most one re-fetch.
    pub fn has_pending_events(&self) -> bool {
        let mut seen = false;
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    debug!(
                        event = "core.feed.change_received",
                        channel = event.channel,
                        payload = event.payload
                    );
                    seen = true;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        seen
    }

    /// Release the subscription. Idempotent.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.listener_task.abort();
        info!(event = "core.feed.closed");
    }
}

impl Drop for ChangeFeed {
    fn drop(&mut self) {
        self.close();
    }
}

/// Forward notifications into the queue until the listener or the
/// receiving side goes away.
async fn forward_notifications(mut listener: PgListener, tx: Sender<ChangeEvent>) {
    loop {
        match listener.recv().await {
            Ok(notification) => {
                let event = ChangeEvent {
                    channel: notification.channel().to_string(),
                    payload: notification.payload().to_string(),
                };
                if tx.send(event).is_err() {
                    debug!(event = "core.feed.receiver_dropped");
                    break;
                }
            }
            Err(e) => {
                // No reconnect: a dropped connection silently ends live
                // updates, leaving manual refresh as the fallback.
                warn!(event = "core.feed.listener_failed", error = %e);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_feed() -> (Sender<ChangeEvent>, ChangeFeed) {
        let (tx, rx) = std::sync::mpsc::channel();
        let listener_task = tokio::spawn(async {});
        (
            tx,
            ChangeFeed {
                events: rx,
                listener_task,
                closed: false,
            },
        )
    }

    fn event(payload: &str) -> ChangeEvent {
        ChangeEvent {
            channel: "issues_changed".to_string(),
            payload: payload.to_string(),
        }
    }

    #[tokio::test]
    async fn test_no_events_pending_initially() {
        let (_tx, feed) = test_feed();
        assert!(!feed.has_pending_events());
    }

    #[tokio::test]
    async fn test_has_pending_events_drains_queue() {
        let (tx, feed) = test_feed();

        tx.send(event("INSERT")).unwrap();
        tx.send(event("UPDATE")).unwrap();
        tx.send(event("DELETE")).unwrap();

        // First poll sees the burst as a single pending signal...
        assert!(feed.has_pending_events());
        // ...and drains it, so the next poll is quiet.
        assert!(!feed.has_pending_events());
    }

    #[tokio::test]
    async fn test_pending_after_sender_dropped() {
        let (tx, feed) = test_feed();
        tx.send(event("INSERT")).unwrap();
        drop(tx);

        // Events queued before disconnect are still observed.
        assert!(feed.has_pending_events());
        assert!(!feed.has_pending_events());
    }

    #[tokio::test]
    async fn test_close_is_idempotent() {
        let (_tx, mut feed) = test_feed();
        feed.close();
        feed.close();
        assert!(feed.closed);
        // Drop runs close() a third time; must not panic.
    }

    #[tokio::test]
    async fn test_close_aborts_listener_task() {
        let (tx, rx) = std::sync::mpsc::channel();
        let _keep_sender_alive: Sender<ChangeEvent> = tx;
        let listener_task = tokio::spawn(async {
            loop {
                tokio::time::sleep(std::time::Duration::from_secs(60)).await;
            }
        });
        let abort_handle = listener_task.abort_handle();

        let mut feed = ChangeFeed {
            events: rx,
            listener_task,
            closed: false,
        };
        feed.close();
        drop(feed);

        // Give the runtime a chance to observe the abort.
        tokio::task::yield_now().await;
        assert!(abort_handle.is_finished());
    }
}
