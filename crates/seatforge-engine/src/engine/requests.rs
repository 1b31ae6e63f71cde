//! Bookkeeping for outstanding layout requests.

use std::collections::BTreeSet;

/// How a completed request relates to what is already applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resolution {
    /// Newer than anything applied so far.
    Current,

    /// A newer request was applied first; drop this result.
    Stale,
}

/// Issues tickets and decides which results may still be applied.
#[derive(Debug, Clone, Default)]
pub(crate) struct RequestLedger {
    next_ticket: u64,
    outstanding: BTreeSet<u64>,
    last_applied: Option<u64>,
}

impl RequestLedger {
    pub(crate) fn issue(&mut self) -> u64 {
        self.next_ticket += 1;
        self.outstanding.insert(self.next_ticket);
        self.next_ticket
    }

    /// Removes `ticket` from the outstanding set.
    ///
    /// Returns `None` if the ticket was never issued or already resolved.
    pub(crate) fn resolve(&mut self, ticket: u64) -> Option<Resolution> {
        if !self.outstanding.remove(&ticket) {
            return None;
        }
        match self.last_applied {
            Some(applied) if applied > ticket => Some(Resolution::Stale),
            _ => Some(Resolution::Current),
        }
    }

    /// Forgets `ticket` without resolving it. Returns whether it was
    /// outstanding.
    pub(crate) fn abandon(&mut self, ticket: u64) -> bool {
        self.outstanding.remove(&ticket)
    }

    pub(crate) fn mark_applied(&mut self, ticket: u64) {
        self.last_applied = Some(ticket);
    }

    pub(crate) fn has_outstanding(&self) -> bool {
        !self.outstanding.is_empty()
    }
}
