//! Last-route-wins ordering for in-flight category fetches.

use std::sync::atomic::{AtomicU64, Ordering};

use super::path;

/// Identifies one category fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTicket {
    seq: u64,
    path: String,
}

impl RouteTicket {
    /// Sequence number; later tickets compare greater.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Normalized path the fetch was issued for.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Issues tickets and tells whether a ticket is still the latest one.
///
/// A response is applied only while its ticket is current; anything that
/// arrives after a newer navigation was issued is stale.
#[derive(Debug, Default)]
pub struct RouteSequencer {
    latest: AtomicU64,
}

impl RouteSequencer {
    /// A sequencer that has issued no tickets yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a navigation to `raw_path`.
    pub fn issue(&self, raw_path: &str) -> RouteTicket {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RouteTicket {
            seq,
            path: path::normalize(raw_path),
        }
    }

    /// Whether no ticket has been issued after `ticket`.
    pub fn is_current(&self, ticket: &RouteTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.seq
    }

    /// Sequence number of the most recent ticket (0 before any).
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let sequencer = RouteSequencer::new();
        let first = sequencer.issue("electronics");
        assert!(sequencer.is_current(&first));

        let second = sequencer.issue("/home/kitchen/");
        assert!(!sequencer.is_current(&first));
        assert!(sequencer.is_current(&second));
        assert!(second.seq() > first.seq());
        assert_eq!(second.path(), "home/kitchen");
    }

    #[test]
    fn test_same_path_still_gets_new_ticket() {
        let sequencer = RouteSequencer::new();
        let a = sequencer.issue("electronics");
        let b = sequencer.issue("electronics");
        assert_ne!(a, b);
        assert!(!sequencer.is_current(&a));
        assert_eq!(sequencer.latest(), 2);
    }
}
