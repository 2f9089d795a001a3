//! Main view for issueboard-ui.
//!
//! Root view that composes the header (title + Refresh) and the issue
//! list, owns the board state, and runs the two background tasks: the
//! in-flight fetch bridge and the change-feed poller.

use std::sync::Arc;

use gpui::{
    Context, FocusHandle, Focusable, FontWeight, IntoElement, Render, Task, Window, div,
    prelude::*, rgb,
};

use issueboard_core::IssueStore;
use tokio::runtime::Handle;

use crate::actions;
use crate::state::BoardState;
use crate::views::issue_list;

/// Main application view.
///
/// The change-feed subscription lives inside `_feed_task`'s future, so
/// dropping the view cancels the task, which drops the feed and releases
/// the subscription exactly once. Late notifications after that point go
/// nowhere; no re-fetch can fire on a dead view.
pub struct MainView {
    state: BoardState,
    store: Arc<IssueStore>,
    runtime: Handle,
    focus_handle: FocusHandle,
    /// Handle to the change-feed poll task. Must be stored to prevent cancellation.
    _feed_task: Task<()>,
}

impl MainView {
    pub fn new(
        store: Arc<IssueStore>,
        channel: String,
        runtime: Handle,
        cx: &mut Context<Self>,
    ) -> Self {
        let subscribe = actions::spawn_subscribe(&runtime, store.clone(), channel);

        let feed_task = cx.spawn(async move |this, cx: &mut gpui::AsyncApp| {
            let feed = match subscribe.await {
                Ok(Ok(feed)) => feed,
                Ok(Err(e)) => {
                    // Live updates are unavailable; the board still works
                    // off the initial load and manual refresh.
                    tracing::error!(event = "ui.feed.subscribe_failed", error = %e);
                    return;
                }
                Err(e) => {
                    tracing::error!(event = "ui.feed.subscribe_task_failed", error = %e);
                    return;
                }
            };

            tracing::debug!(event = "ui.feed_task.started");

            loop {
                // Check for queued events every 50ms (cheap - just channel poll)
                cx.background_executor()
                    .timer(crate::refresh::FEED_POLL_INTERVAL)
                    .await;

                if let Err(e) = this.update(cx, |view, cx| {
                    if feed.has_pending_events() {
                        tracing::info!(event = "ui.feed.refresh_triggered");
                        view.request_fetch(cx);
                    }
                }) {
                    tracing::debug!(
                        event = "ui.feed_task.stopped",
                        reason = "view_dropped",
                        error = ?e
                    );
                    break;
                }
            }
        });

        let mut view = Self {
            state: BoardState::new(),
            store,
            runtime,
            focus_handle: cx.focus_handle(),
            _feed_task: feed_task,
        };

        // Initial load; the connecting message shows until it lands.
        view.request_fetch(cx);
        view
    }

    /// Issue a full-table fetch and apply its result when it resolves.
    ///
    /// Used for the initial load, the Refresh button, and every change
    /// notification. Overlapping calls are allowed; the state's sequence
    /// counter discards results of superseded requests.
    pub fn request_fetch(&mut self, cx: &mut Context<Self>) {
        let seq = self.state.begin_fetch();
        cx.notify();

        let fetch = actions::spawn_fetch(&self.runtime, self.store.clone());
        cx.spawn(async move |this, cx: &mut gpui::AsyncApp| {
            let result = match fetch.await {
                Ok(Ok(issues)) => Ok(issues),
                Ok(Err(e)) => Err(e.to_string()),
                Err(e) => Err(format!("fetch task aborted: {e}")),
            };

            if let Err(e) = this.update(cx, |view, cx| {
                view.state.apply_fetch(seq, result);
                cx.notify();
            }) {
                tracing::debug!(
                    event = "ui.fetch.view_update_failed",
                    reason = "view_dropped",
                    error = ?e
                );
            }
        })
        .detach();
    }

    /// Handle click on the Refresh button in header.
    fn on_refresh_click(&mut self, cx: &mut Context<Self>) {
        tracing::info!(event = "ui.refresh_clicked");
        self.request_fetch(cx);
    }
}

impl Focusable for MainView {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for MainView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.state.is_loading() {
            // Connecting state replaces the whole board, initial load and
            // refreshes alike.
            return div()
                .track_focus(&self.focus_handle)
                .size_full()
                .flex()
                .justify_center()
                .items_center()
                .bg(rgb(0x1e1e1e))
                .child(
                    div()
                        .text_xl()
                        .text_color(rgb(0xcccccc))
                        .child("Connecting to the collaboration database..."),
                );
        }

        div()
            .track_focus(&self.focus_handle)
            .size_full()
            .flex()
            .flex_col()
            .bg(rgb(0x1e1e1e))
            // Header with title and Refresh button
            .child(
                div()
                    .px_4()
                    .py_3()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_xl()
                                    .text_color(rgb(0xffffff))
                                    .font_weight(FontWeight::BOLD)
                                    .child("Issue Board"),
                            )
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(rgb(0x888888))
                                    .child("most recently updated first"),
                            ),
                    )
                    .child(
                        div()
                            .id("refresh-btn")
                            .px_3()
                            .py_1()
                            .bg(rgb(0x444444))
                            .hover(|style| style.bg(rgb(0x555555)))
                            .rounded_md()
                            .cursor_pointer()
                            .on_mouse_up(
                                gpui::MouseButton::Left,
                                cx.listener(|view, _, _, cx| {
                                    view.on_refresh_click(cx);
                                }),
                            )
                            .child(div().text_color(rgb(0xffffff)).child("Refresh")),
                    ),
            )
            // Issue list
            .child(issue_list::render_issue_list(&self.state, cx))
    }
}
