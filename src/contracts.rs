//! Contract-based validation for game transitions.
//!
//! Contracts define correctness through preconditions and postconditions,
//! formalizing the Hoare-style reasoning: {P} action {Q}. Preconditions
//! run on every call; postconditions are verified in debug builds.

use crate::action::{Move, MoveError, RewindError};
use crate::game::Game;
use crate::invariants::{
    AlternatingMarkInvariant, GameInvariants, Invariant, InvariantSet, RootedHistoryInvariant,
    SnapshotLineageInvariant,
};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for a state
/// transition.
///
/// - Precondition: {P(state, action)} must hold before applying the action.
/// - Postcondition: {Q(before, after)} must hold after applying it.
pub trait Contract<S, A> {
    /// Rejection produced when the contract does not hold.
    type Error;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Error>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), Self::Error>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the precondition for a move against a game.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if !game.board().is_empty(mov.position) {
            Err(MoveError::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The current board must not already have a winner.
pub struct GameUndecided;

impl GameUndecided {
    /// Checks that no winning line sits on the current board.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        match game.winner() {
            Some(winner) => Err(MoveError::GameDecided(winner)),
            None => Ok(()),
        }
    }
}

/// Composite precondition: a move is legal when the game is undecided and
/// the target square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    ///
    /// The decided-game check runs first, so a click on an occupied square
    /// of a finished game reports the game-level rejection.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        GameUndecided::check(game)?;
        SquareIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Rewind Precondition
// ─────────────────────────────────────────────────────────────

/// Precondition: The rewind target must index a recorded snapshot.
pub struct StepInHistory;

impl StepInHistory {
    /// Checks the rewind target against the recorded history bounds.
    #[instrument(skip(game))]
    pub fn check(step: usize, game: &Game) -> Result<(), RewindError> {
        let len = game.history().len();
        if step >= len {
            Err(RewindError::StepOutOfRange { step, len })
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move transitions.
///
/// Preconditions:
/// - Current board has no winner
/// - Target square is empty
///
/// Postconditions:
/// - History was truncated to the pre-move step, then grew by one
/// - The new step points at the appended snapshot
/// - The mark to move flipped
/// - The full invariant set holds
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    type Error = MoveError;

    fn pre(game: &Game, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        if after.history().len() != before.current_step() + 2 {
            warn!(
                before_step = before.current_step(),
                after_len = after.history().len(),
                "move postcondition failed: history length"
            );
            return Err(MoveError::InvariantViolation(format!(
                "history length {} after a move from step {}",
                after.history().len(),
                before.current_step()
            )));
        }

        if after.current_step() != after.history().len() - 1 {
            return Err(MoveError::InvariantViolation(format!(
                "current step {} does not point at the appended snapshot",
                after.current_step()
            )));
        }

        if after.to_move() != before.to_move().opponent() {
            return Err(MoveError::InvariantViolation(
                "mark to move did not flip".to_string(),
            ));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "move postcondition failed: invariants");
            MoveError::InvariantViolation(format!("Postcondition failed: {descriptions}"))
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Rewind Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for rewind transitions.
///
/// Precondition: the target step indexes a recorded snapshot.
/// Postcondition: history contents and length are untouched.
pub struct RewindContract;

impl Contract<Game, usize> for RewindContract {
    type Error = RewindError;

    fn pre(game: &Game, step: &usize) -> Result<(), RewindError> {
        StepInHistory::check(*step, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), RewindError> {
        if before.history() != after.history() {
            warn!("rewind postcondition failed: history was altered");
            return Err(RewindError::InvariantViolation(
                "rewind altered the recorded history".to_string(),
            ));
        }
        Ok(())
    }
}

/// Asserts that all game invariants hold (panics on violation in debug
/// builds).
#[instrument(skip(game))]
pub fn assert_invariants(game: &Game) {
    debug_assert!(
        RootedHistoryInvariant::holds(game),
        "{}",
        RootedHistoryInvariant::description()
    );
    debug_assert!(
        AlternatingMarkInvariant::holds(game),
        "{}",
        AlternatingMarkInvariant::description()
    );
    debug_assert!(
        SnapshotLineageInvariant::holds(game),
        "{}",
        SnapshotLineageInvariant::description()
    );
}
