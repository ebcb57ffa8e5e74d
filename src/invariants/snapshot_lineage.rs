//! Snapshot lineage invariant.

use crate::game::Game;
use crate::invariants::Invariant;
use crate::position::Position;
use crate::snapshot::Snapshot;
use crate::types::Square;
use strum::IntoEnumIterator;

/// Invariant: every snapshot is its parent's board plus exactly the one
/// recorded move, placed into a previously empty square.
///
/// Stored snapshots are immutable, so the only legal difference between
/// consecutive history entries is the single mark the child's recorded
/// move placed. Any other delta means a stored board was edited after
/// the fact.
pub struct SnapshotLineageInvariant;

impl Invariant<Game> for SnapshotLineageInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .snapshots()
            .windows(2)
            .all(|pair| child_follows(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot differs from its parent by exactly the recorded move"
    }
}

fn child_follows(parent: &Snapshot, child: &Snapshot) -> bool {
    let mov = match child.last_move() {
        Some(mov) => mov,
        None => return false,
    };
    if parent.board().get(mov.position) != Square::Empty {
        return false;
    }
    Position::iter().all(|position| {
        let expected = if position == mov.position {
            Square::Occupied(mov.player)
        } else {
            parent.board().get(position)
        };
        child.board().get(position) == expected
    })
}
