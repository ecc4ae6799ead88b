//! Service counters.
//!
//! [`CubeService`](crate::CubeService) bumps relaxed atomic counters as it
//! handles requests; [`ServiceMetrics`] is a point-in-time copy of them.
//! Counters are cumulative for the life of the service.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Cumulative request counts for one service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ServiceMetrics {
    /// Quarter turns applied, counting each move of a sequence or scramble.
    pub moves_applied: u64,
    /// Requests rejected with an unknown move, a malformed state or an
    /// over-long sequence.
    pub requests_rejected: u64,
    /// Sequence requests, including scrambles.
    pub sequences_applied: u64,
    /// Resets.
    pub resets: u64,
    /// State queries, including cubie views.
    pub queries: u64,
    /// Sessions given a solved state on first access.
    pub sessions_initialised: u64,
}

#[derive(Debug, Default)]
pub(crate) struct Counters {
    pub(crate) moves_applied: AtomicU64,
    pub(crate) requests_rejected: AtomicU64,
    pub(crate) sequences_applied: AtomicU64,
    pub(crate) resets: AtomicU64,
    pub(crate) queries: AtomicU64,
    pub(crate) sessions_initialised: AtomicU64,
}

impl Counters {
    pub(crate) fn bump(counter: &AtomicU64, n: u64) {
        counter.fetch_add(n, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> ServiceMetrics {
        let read = |c: &AtomicU64| c.load(Ordering::Relaxed);
        ServiceMetrics {
            moves_applied: read(&self.moves_applied),
            requests_rejected: read(&self.requests_rejected),
            sequences_applied: read(&self.sequences_applied),
            resets: read(&self.resets),
            queries: read(&self.queries),
            sessions_initialised: read(&self.sessions_initialised),
        }
    }
}
