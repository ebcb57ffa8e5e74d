//! The recorded sequence of board snapshots.

use crate::snapshot::Snapshot;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ordered history of snapshots, rooted at the empty starting board.
///
/// Entry 0 is always [`Snapshot::initial`]. The history is append-only up
/// to the current step of the owning game; entries beyond that step are
/// discarded when a new move branches off an earlier snapshot. The single
/// mutation point is [`History::truncate_then_append`], which is crate
/// private, so game transitions are the only code path that can change a
/// history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates a history containing only the root snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
        }
    }

    /// Returns the number of recorded snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Gets the snapshot at the given step.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// Returns all recorded snapshots in step order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Drops every entry after `keep_through`, then appends `snapshot`.
    ///
    /// This is the move-transition contract's explicit truncate-then-append
    /// step: branching off an earlier snapshot discards the abandoned tail
    /// for good rather than hiding it.
    pub(crate) fn truncate_then_append(&mut self, keep_through: usize, snapshot: Snapshot) {
        let discarded = self.snapshots.len().saturating_sub(keep_through + 1);
        if discarded > 0 {
            debug!(discarded, keep_through, "discarding rewound history tail");
        }
        self.snapshots.truncate(keep_through + 1);
        self.snapshots.push(snapshot);
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
