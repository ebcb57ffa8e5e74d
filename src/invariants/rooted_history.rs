//! Rooted history invariant.

use crate::game::Game;
use crate::invariants::Invariant;
use crate::snapshot::Snapshot;

/// Invariant: the history is anchored at the pristine start and the
/// current step points inside it.
///
/// Entry 0 must always be the empty board with no move behind it, and
/// `current_step` must index a recorded snapshot. Together these
/// guarantee that rewinding to step 0 reaches a genuine fresh game and
/// that the current snapshot lookup cannot dangle.
pub struct RootedHistoryInvariant;

impl Invariant<Game> for RootedHistoryInvariant {
    fn holds(game: &Game) -> bool {
        let rooted = game.history().get(0) == Some(&Snapshot::initial());
        let step_recorded = game.current_step() < game.history().len();
        rooted && step_recorded
    }

    fn description() -> &'static str {
        "History starts at the empty board and the current step indexes a recorded snapshot"
    }
}
