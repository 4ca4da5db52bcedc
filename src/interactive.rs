//! Line-driven searching with overlapping requests.
//!
//! Every non-blank input line becomes its own search task. Results are
//! handled in completion order and filtered through a [`SearchSession`],
//! so an older search never replaces a newer one on screen.

use std::sync::Arc;

use compare_search::{CompareError, QueryDispatcher, SearchOutcome, SearchSession};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;

use crate::error::Result;

/// Something the caller should show.
#[derive(Debug)]
pub enum SessionEvent {
    /// A search finished and is now the current result.
    Shown(SearchOutcome),
    /// A search failed and no newer search has finished yet.
    Failed {
        request_id: u64,
        error: CompareError,
    },
}

/// Counters for one interactive run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InteractiveSummary {
    /// Searches started.
    pub searches: usize,
    /// Most searches in flight at once.
    pub peak_pending: usize,
}

/// Read search terms from `input` until EOF and report results to `on_event`.
///
/// Finished searches are collected as soon as they complete, so only
/// in-flight searches are held while reading.
///
/// # Errors
///
/// Returns an error if reading `input` fails. Search failures are reported
/// through [`SessionEvent::Failed`] instead.
pub async fn run_lines<R, F>(
    dispatcher: Arc<QueryDispatcher>,
    input: R,
    mut on_event: F,
) -> Result<InteractiveSummary>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(SessionEvent),
{
    let session = SearchSession::new();
    let mut summary = InteractiveSummary::default();
    let mut searches = JoinSet::new();
    let mut lines = input.lines();
    let mut reading = true;

    loop {
        tokio::select! {
            line = lines.next_line(), if reading => {
                let Some(line) = line? else {
                    reading = false;
                    continue;
                };
                let term = line.trim();
                if term.is_empty() {
                    continue;
                }
                // Ids follow input order, not task start order.
                let request_id = dispatcher.next_request_id();
                let dispatcher = Arc::clone(&dispatcher);
                let term = term.to_owned();
                searches.spawn(async move {
                    (request_id, dispatcher.search_as(request_id, &term).await)
                });
                summary.searches += 1;
                summary.peak_pending = summary.peak_pending.max(searches.len());
            }
            Some(joined) = searches.join_next(), if !searches.is_empty() => {
                match joined {
                    Ok((_, Ok(outcome))) => {
                        if session.publish(outcome.clone()) {
                            on_event(SessionEvent::Shown(outcome));
                        }
                    }
                    Ok((request_id, Err(error))) => {
                        if session.mark_failed(request_id) {
                            on_event(SessionEvent::Failed { request_id, error });
                        }
                    }
                    Err(err) => tracing::error!(error = %err, "search task panicked"),
                }
            }
            else => break,
        }
    }

    tracing::debug!(
        searches = summary.searches,
        peak_pending = summary.peak_pending,
        "interactive input finished"
    );
    Ok(summary)
}
