//! Bridges to issueboard-core.
//!
//! This module spawns the async database operations on the tokio runtime
//! and hands their join handles back to the view, which awaits them from
//! gpui tasks.

use std::sync::Arc;

use issueboard_core::{ChangeFeed, FeedError, Issue, IssueStore, StoreError};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Start a full-table fetch on the tokio runtime.
pub fn spawn_fetch(
    runtime: &Handle,
    store: Arc<IssueStore>,
) -> JoinHandle<Result<Vec<Issue>, StoreError>> {
    tracing::info!(event = "ui.fetch_issues.started");
    runtime.spawn(async move { store.fetch_all().await })
}

/// Start acquiring the change-feed subscription on the tokio runtime.
///
/// The listener needs its own pooled connection, so this can take a
/// moment on a cold pool; the view keeps working off manual refresh until
/// the feed is up.
pub fn spawn_subscribe(
    runtime: &Handle,
    store: Arc<IssueStore>,
    channel: String,
) -> JoinHandle<Result<ChangeFeed, FeedError>> {
    tracing::info!(event = "ui.feed.subscribe_started", channel = channel);
    runtime.spawn(async move { ChangeFeed::subscribe(store.pool().clone(), &channel).await })
}
