//! Last-submission-wins request sequencing.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonically increasing ticket counter.
///
/// Every submission takes a ticket via `begin`; when its response resolves
/// the caller applies it only if the ticket `is_current`. A newer
/// submission invalidates all earlier tickets, so a slow early response can
/// never overwrite the result of a later one. Stale resolutions are
/// discarded silently, never surfaced as errors.
#[derive(Debug, Default)]
pub struct RequestSequence {
    counter: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        RequestSequence {
            counter: AtomicU64::new(0),
        }
    }

    /// Start a new request cycle and return its ticket.
    pub fn begin(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `ticket` is still the most recently issued one.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.counter.load(Ordering::SeqCst) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::RequestSequence;

    #[test]
    fn test_latest_ticket_wins() {
        let seq = RequestSequence::new();
        let first = seq.begin();
        let second = seq.begin();

        // First submission resolves after the second one started: discard.
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_single_ticket_is_current_until_superseded() {
        let seq = RequestSequence::new();
        let ticket = seq.begin();
        assert!(seq.is_current(ticket));
        seq.begin();
        assert!(!seq.is_current(ticket));
    }
}
