//! Tic-tac-toe game core with recorded history and time-travel rewind.
//!
//! Every move appends an immutable board snapshot to the game's history;
//! the rewind list exposes those snapshots as labeled steps and the game
//! can jump back onto any of them. Playing from a rewound step branches
//! the timeline: the abandoned future entries are discarded and the new
//! move continues from there.
//!
//! # Architecture
//!
//! - **Types**: the board, the marks, and the closed set of nine positions
//! - **Rules**: pure win and draw detection over a board
//! - **Game**: the state machine (moves, rewind, command dispatch)
//! - **Contracts**: pre/postconditions guarding every transition
//! - **Invariants**: first-class properties checked in debug builds
//! - **View**: flat, serializable render model for host UIs
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{Game, GameStatus, Player, Position};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let game = Game::new()
//!     .play(Position::Center)?
//!     .play(Position::TopLeft)?;
//! assert_eq!(game.status(), GameStatus::Turn(Player::X));
//! assert_eq!(game.history().len(), 3);
//!
//! // Jump back one step and branch off it; the abandoned entry is gone.
//! let branched = game.rewind_to(1)?.play(Position::BottomRight)?;
//! assert_eq!(branched.history().len(), 3);
//! assert_eq!(branched.to_move(), Player::X);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod game;
mod history;
mod invariants;
mod position;
mod rules;
mod snapshot;
mod types;
mod view;

// Crate-level exports - Core types
pub use types::{Board, Player, Square};

// Crate-level exports - Positions
pub use position::Position;

// Crate-level exports - Actions and rejections
pub use action::{Command, CommandError, Move, MoveError, RewindError};

// Crate-level exports - Rules
pub use rules::{check_winner, is_draw, is_full};

// Crate-level exports - History and snapshots
pub use history::History;
pub use snapshot::Snapshot;

// Crate-level exports - Game state machine
pub use game::{Game, GameStatus};

// Crate-level exports - Contracts
pub use contracts::{
    Contract, GameUndecided, LegalMove, MoveContract, RewindContract, SquareIsEmpty,
    StepInHistory,
};

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingMarkInvariant, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    RootedHistoryInvariant, SnapshotLineageInvariant,
};

// Crate-level exports - Render model
pub use view::{GameView, StepEntry};

/// Alias for clarity at the rendering boundary.
pub type Mark = Player;
