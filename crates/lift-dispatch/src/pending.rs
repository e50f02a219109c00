//! `PendingQueue` — unassigned requests in stable arrival order.
//!
//! Requests are ordered by `(arrival_tick, request_id)`.  Ids are handed out
//! in creation order, so the id doubles as the FIFO tie-break for requests
//! arriving on the same tick.  A request bounced back by a full cabin is
//! re-inserted at its original position, not at the back.

use lift_core::{RequestId, Tick};

/// Unassigned requests, ordered by arrival tick with id as tie-break.
#[derive(Default)]
pub struct PendingQueue {
    inner: Vec<(Tick, RequestId)>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a request, preserving `(arrival, id)` order.
    ///
    /// Used both for newly admitted requests and for requests returned by a
    /// full cabin — the latter resume their original place in line.
    pub fn insert(&mut self, arrival: Tick, id: RequestId) {
        let pos = self.inner.partition_point(|&entry| entry <= (arrival, id));
        self.inner.insert(pos, (arrival, id));
    }

    /// Remove a request (assignment or withdrawal).  Returns `false` if it
    /// was not pending.
    pub fn remove(&mut self, id: RequestId) -> bool {
        match self.inner.iter().position(|&(_, r)| r == id) {
            Some(pos) => {
                self.inner.remove(pos);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn contains(&self, id: RequestId) -> bool {
        self.inner.iter().any(|&(_, r)| r == id)
    }

    /// Request ids in service order.
    pub fn ids(&self) -> impl Iterator<Item = RequestId> + '_ {
        self.inner.iter().map(|&(_, r)| r)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
