//! First-class actions and rejections for the game core.
//!
//! Moves and commands are domain events, not side effects. They can be
//! validated independently of execution, serialized across the rendering
//! boundary, and logged for debugging.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player placing their mark at a position.
///
/// Besides being the input of a move transition, a `Move` doubles as a
/// snapshot's provenance record (which mark was placed where to produce it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// A command from the rendering boundary.
///
/// Click events arrive as raw indexes; validation happens inside the game
/// core, never in the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Command {
    /// Place the next mark at a raw board index (0-8, row-major).
    Play {
        /// Board index carried by the click event.
        position: usize,
    },
    /// Reposition the current step onto a recorded snapshot.
    RewindTo {
        /// Step index into the recorded history.
        step: usize,
    },
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The raw index from the boundary does not name a board square.
    #[display("Position {} is outside the board (valid indexes are 0-8)", _0)]
    InvalidPosition(usize),

    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game already has a winner; no further moves are accepted.
    #[display("Game is already decided, {} has won", _0)]
    GameDecided(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Error that can occur when rewinding to a recorded step.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RewindError {
    /// The requested step does not index a recorded snapshot.
    #[display("Step {} is outside recorded history of length {}", step, len)]
    StepOutOfRange {
        /// The step that was requested.
        step: usize,
        /// The history length at the time of the request.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for RewindError {}

/// Aggregate rejection for the command dispatch boundary.
///
/// Every rejection leaves the game unchanged; callers that keep the
/// original silent-ignore behavior simply drop the error.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum CommandError {
    /// A play command was rejected.
    #[display("{}", _0)]
    #[from]
    Move(#[error(source)] MoveError),

    /// A rewind command was rejected.
    #[display("{}", _0)]
    #[from]
    Rewind(#[error(source)] RewindError),
}
