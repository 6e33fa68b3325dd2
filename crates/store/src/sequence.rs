//! Stale-response suppression.
//!
//! Each slice owns a monotonic counter. A thunk takes a ticket before it
//! dispatches its pending action; when the request resolves, the terminal
//! action is dispatched only if no newer ticket has been issued since.
//! A superseded request is dropped wholesale, so the slice always shows
//! the outcome of the most recently issued request.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonically increasing request counter shared by the thunks of one
/// slice. Cloning shares the counter.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket, superseding every ticket issued before it.
    #[must_use]
    pub fn issue(&self) -> RequestTicket {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            seq,
            latest: Arc::clone(&self.latest),
        }
    }
}

/// Handle identifying one issued request.
#[derive(Debug, Clone)]
pub struct RequestTicket {
    seq: u64,
    latest: Arc<AtomicU64>,
}

impl RequestTicket {
    /// Whether this request is still the latest one issued on its sequence.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.seq == self.latest.load(Ordering::SeqCst)
    }
}
