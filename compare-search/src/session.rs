//! Stale-response guard for overlapping searches.
//!
//! Rapid searches can overlap, and a slow earlier search may finish after a
//! faster later one. [`SearchSession`] keeps the outcome currently shown
//! and only accepts outcomes newer than any search that already finished,
//! including failed ones, so displayed state never goes backwards.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::dispatch::SearchOutcome;

#[derive(Debug, Default)]
struct SessionState {
    /// Highest request id that has finished, successfully or not.
    latest: u64,
    current: Option<SearchOutcome>,
}

/// Holds the most recent accepted [`SearchOutcome`].
#[derive(Debug, Default)]
pub struct SearchSession {
    state: Mutex<SessionState>,
}

impl SearchSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer an outcome for display.
    ///
    /// Returns `true` and replaces the current outcome if `outcome` is newer
    /// than every search finished so far. Returns `false` and drops
    /// `outcome` if it is stale.
    pub fn publish(&self, outcome: SearchOutcome) -> bool {
        let mut state = self.lock();
        if outcome.request_id <= state.latest {
            tracing::debug!(
                stale = outcome.request_id,
                latest = state.latest,
                "discarding stale search outcome"
            );
            return false;
        }
        state.latest = outcome.request_id;
        state.current = Some(outcome);
        true
    }

    /// Record that search `request_id` failed.
    ///
    /// The shown outcome is kept, but older searches still in flight can no
    /// longer replace it. Returns `false` if the failure is itself stale.
    pub fn mark_failed(&self, request_id: u64) -> bool {
        let mut state = self.lock();
        if request_id <= state.latest {
            tracing::debug!(stale = request_id, latest = state.latest, "discarding stale failure");
            return false;
        }
        state.latest = request_id;
        true
    }

    /// Request id of the outcome currently shown.
    pub fn current_request_id(&self) -> Option<u64> {
        self.lock().current.as_ref().map(|o| o.request_id)
    }

    /// Highest request id that has finished, or 0 if none.
    pub fn latest_request_id(&self) -> u64 {
        self.lock().latest
    }

    /// A copy of the outcome currently shown.
    pub fn current(&self) -> Option<SearchOutcome> {
        self.lock().current.clone()
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        // Every update leaves the state consistent, so a poisoned lock is
        // still usable.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
