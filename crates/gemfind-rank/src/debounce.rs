//! Debounced filter-state → URL writes.
//!
//! Every filter mutation wants the URL updated, but a slider drag mutates
//! dozens of times per second. The writer owns a single pending timer:
//! scheduling cancels whatever was pending and starts over, so a burst of
//! mutations produces exactly one trailing write carrying the final state.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use gemfind_core::FilterState;

use crate::query;

/// Where the encoded query string lands. Implementations replace the
/// current navigable location in place — no new history entry, no scroll
/// reset.
pub trait LocationSink: Send + Sync {
    fn replace(&self, query: &str);
}

/// Debounced writer keeping the location in sync with filter state.
///
/// At most one write is ever outstanding per instance; dropping the writer
/// cancels a pending write rather than letting it fire late.
pub struct UrlSync {
    sink: Arc<dyn LocationSink>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl UrlSync {
    #[must_use]
    pub fn new(sink: Arc<dyn LocationSink>, delay: Duration) -> Self {
        Self {
            sink,
            delay,
            pending: None,
        }
    }

    /// Schedule a write reflecting `state`, cancelling any pending write.
    ///
    /// The state is encoded eagerly so the spawned task carries no borrow;
    /// whichever schedule survives the debounce window is by construction
    /// the latest one.
    pub fn schedule(&mut self, state: &FilterState) {
        self.cancel();

        let query = query::encode(state);
        let sink = Arc::clone(&self.sink);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::trace!(query = %query, "debounced URL write");
            sink.replace(&query);
        }));
    }

    /// Write `state` immediately, cancelling any pending write. Used when
    /// the session is about to end and the trailing delay would lose the
    /// final state.
    pub fn flush(&mut self, state: &FilterState) {
        self.cancel();
        self.sink.replace(&query::encode(state));
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for UrlSync {
    fn drop(&mut self) {
        self.cancel();
    }
}
