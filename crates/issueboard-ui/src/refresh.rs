//! Poll cadence for the realtime change feed.
//!
//! The feed queues notifications off-thread; the UI drains the queue on a
//! short timer (cheap when nothing arrived) and re-fetches when it finds
//! anything. One tick coalesces a burst of changes into one re-fetch.

use std::time::Duration;

/// How often the UI checks the change feed for queued events.
pub const FEED_POLL_INTERVAL: Duration = Duration::from_millis(50);
