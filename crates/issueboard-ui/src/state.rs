//! Application state for issueboard-ui.
//!
//! Centralized state for the dashboard: the mirrored issue list, the
//! loading flag, and the fetch sequence counter that settles overlapping
//! fetches.

use issueboard_core::Issue;

/// Dashboard state.
///
/// All fields are private - mutations go through [`BoardState::begin_fetch`]
/// and [`BoardState::apply_fetch`] so the invariants hold:
///
/// - the issue list is always a full replica of the last applied fetch,
///   replaced wholesale and in server order, never merged or re-sorted;
/// - a failed fetch leaves the previous list displayed (logged only, no
///   user-visible error state);
/// - when fetches overlap, only the most recently requested one may apply;
///   stale results are discarded rather than racing last-resolved-wins.
pub struct BoardState {
    /// Mirrored issue rows, in the order the server returned them.
    issues: Vec<Issue>,
    /// True from `begin_fetch` until the matching `apply_fetch`.
    loading: bool,
    /// Sequence number of the most recently requested fetch.
    fetch_seq: u64,
}

impl BoardState {
    /// Create state for a board that has not loaded yet.
    ///
    /// Starts in the loading state: the view shows its connecting message
    /// until the initial fetch lands.
    pub fn new() -> Self {
        Self {
            issues: Vec::new(),
            loading: true,
            fetch_seq: 0,
        }
    }

    /// Record that a fetch was requested and return its sequence number.
    ///
    /// The caller passes the number back to [`BoardState::apply_fetch`]
    /// when the result arrives.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.loading = true;
        self.fetch_seq
    }

    /// Apply a fetch result.
    ///
    /// Results from superseded fetches are discarded entirely: they
    /// neither replace the list nor clear the loading flag, which still
    /// belongs to the newest request.
    pub fn apply_fetch(&mut self, seq: u64, result: Result<Vec<Issue>, String>) {
        if seq != self.fetch_seq {
            tracing::debug!(
                event = "ui.fetch.stale_result_discarded",
                seq = seq,
                current_seq = self.fetch_seq
            );
            return;
        }

        match result {
            Ok(issues) => {
                tracing::info!(event = "ui.fetch.completed", count = issues.len());
                self.issues = issues;
            }
            Err(e) => {
                // Keep showing the previous list; the user gets no error
                // indicator and no automatic retry.
                tracing::error!(event = "ui.fetch.failed", error = %e);
            }
        }
        self.loading = false;
    }

    /// The mirrored issues, in server order.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the board has no issues to show.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
