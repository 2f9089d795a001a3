//! Issue list view component.
//!
//! Renders the mirrored issue rows in server order: category, status,
//! description, and the last-updated timestamp.

use chrono::{DateTime, Local, Utc};
use gpui::{Context, IntoElement, div, prelude::*, rgb, uniform_list};

use issueboard_core::IssueStatus;

use crate::state::BoardState;
use crate::views::MainView;

/// Format a last-updated timestamp in local time, or "-" when absent.
fn format_last_updated(timestamp: Option<&DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => "-".to_string(),
    }
}

/// Row color for an issue status.
fn status_color(status: IssueStatus) -> gpui::Rgba {
    match status {
        IssueStatus::Pending => rgb(0xffa500),    // Orange
        IssueStatus::InProgress => rgb(0x4a9eff), // Blue
        IssueStatus::Resolved => rgb(0x00cc66),   // Green
        IssueStatus::NeedsInfo => rgb(0x888888),  // Gray
    }
}

/// Render the issue list based on current state.
///
/// Handles two states:
/// - Empty: Display "No issues reported" message
/// - List: Display uniform_list of issue rows
pub fn render_issue_list(state: &BoardState, cx: &mut Context<MainView>) -> impl IntoElement {
    if state.is_empty() {
        // Empty state - the table has no rows right now
        div()
            .flex()
            .flex_1()
            .justify_center()
            .items_center()
            .text_color(rgb(0x888888))
            .child("No issues reported")
    } else {
        let item_count = state.issues().len();
        let issues = state.issues().to_vec();

        div().flex_1().child(
            uniform_list(
                "issue-list",
                item_count,
                cx.processor(move |_view, range: std::ops::Range<usize>, _window, _cx| {
                    range
                        .map(|ix| {
                            let issue = &issues[ix];

                            div()
                                .id(ix)
                                .w_full()
                                .px_4()
                                .py_2()
                                .flex()
                                .flex_col()
                                .gap_1()
                                .border_b_1()
                                .border_color(rgb(0x333333))
                                // Category and status line
                                .child(
                                    div()
                                        .flex()
                                        .items_center()
                                        .gap_2()
                                        .child(
                                            div()
                                                .text_color(rgb(0xffffff))
                                                .font_weight(gpui::FontWeight::BOLD)
                                                .child(issue.category.label()),
                                        )
                                        .child(div().text_color(rgb(0x666666)).child("—"))
                                        .child(
                                            div()
                                                .text_color(status_color(issue.status))
                                                .child(issue.status.label()),
                                        ),
                                )
                                // Description
                                .child(
                                    div()
                                        .text_color(rgb(0xdddddd))
                                        .child(issue.description.clone()),
                                )
                                // Last updated timestamp (or "-" when absent)
                                .child(div().text_sm().text_color(rgb(0x888888)).child(format!(
                                    "Last updated: {}",
                                    format_last_updated(issue.last_updated.as_ref())
                                )))
                        })
                        .collect()
                }),
            )
            .h_full(),
        )
    }
}
