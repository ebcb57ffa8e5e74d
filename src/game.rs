//! The game state machine: moves, recorded history, and rewind.
//!
//! Transitions are pure functions over an externally owned value: they
//! borrow the current game and return a fresh one, so a rejected command
//! leaves the caller's state untouched and previously captured snapshots
//! stay valid. Preconditions always run; postconditions and the invariant
//! set are verified in debug builds.

use crate::action::{Command, CommandError, Move, MoveError, RewindError};
use crate::contracts::{assert_invariants, Contract, MoveContract, RewindContract};
use crate::history::History;
use crate::position::Position;
use crate::rules;
use crate::snapshot::Snapshot;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// Current status of the game, as the rendering layer consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing and the given mark moves next.
    Turn(Player),
    /// Game ended with a winner.
    Won(Player),
    /// Board is full with no winning line.
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            GameStatus::Turn(_) | GameStatus::Draw => None,
        }
    }

    /// Returns true if the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameStatus::Draw)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Turn(player) => write!(f, "Next player: {player}"),
            GameStatus::Won(player) => write!(f, "Winner: {player}"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Authoritative game state: the snapshot history, the current step, and
/// the opening mark.
///
/// Whose turn it is carries no storage of its own: marks strictly
/// alternate, so [`Game::to_move`] derives it from step parity and the
/// opening mark. A game that ever allowed skipped turns would have to
/// record the mark per snapshot instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) history: History,
    pub(crate) current_step: usize,
    pub(crate) first_mark: Player,
}

// ─────────────────────────────────────────────────────────────
//  Construction
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Creates a new game with X opening, at the empty root snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self::starting_with(Player::X)
    }

    /// Creates a new game with the given mark opening.
    #[instrument]
    pub fn starting_with(first_mark: Player) -> Self {
        Self {
            history: History::new(),
            current_step: 0,
            first_mark,
        }
    }

    /// Replays a sequence of positions from a fresh game, alternating
    /// marks from X.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Game, MoveError> {
        let mut game = Game::new();
        for position in positions {
            game = game.play(*position)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Derived state
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Returns the recorded history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the step the game currently displays and plays from.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the snapshot at the current step.
    pub fn current(&self) -> &Snapshot {
        self.history
            .get(self.current_step)
            .expect("current step indexes a recorded snapshot")
    }

    /// Returns the board at the current step.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Returns the mark that moves next from the current step.
    pub fn to_move(&self) -> Player {
        self.to_move_at(self.current_step)
    }

    /// Returns the mark that moves next once `step` moves have been played.
    ///
    /// Purely a function of step parity and the opening mark, independent
    /// of which moves were actually recorded.
    pub fn to_move_at(&self, step: usize) -> Player {
        if step % 2 == 0 {
            self.first_mark
        } else {
            self.first_mark.opponent()
        }
    }

    /// Returns the winner on the current board, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.board())
    }

    /// Returns the game status at the current step.
    pub fn status(&self) -> GameStatus {
        let board = self.board();
        if let Some(winner) = rules::check_winner(board) {
            GameStatus::Won(winner)
        } else if rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::Turn(self.to_move())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move transition
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Places the next mark at `position`, returning the advanced game.
    ///
    /// On success the history is truncated to the current step and the new
    /// snapshot appended, so any future entries from an earlier rewind are
    /// discarded for good. Stored snapshots are never edited.
    ///
    /// # Errors
    ///
    /// [`MoveError::SquareOccupied`] if the square is taken on the current
    /// board; [`MoveError::GameDecided`] if the current board already has a
    /// winner. The receiver is unchanged either way.
    #[instrument(skip(self), fields(mark = ?self.to_move(), step = self.current_step))]
    pub fn play(&self, position: Position) -> Result<Game, MoveError> {
        let mov = Move::new(self.to_move(), position);
        MoveContract::pre(self, &mov)?;

        let mut history = self.history.clone();
        history.truncate_then_append(self.current_step, self.current().apply(mov));
        let next = Game {
            current_step: history.len() - 1,
            history,
            first_mark: self.first_mark,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;
        assert_invariants(&next);

        debug!(board = %next.board(), step = next.current_step, "mark placed");
        Ok(next)
    }
}

// ─────────────────────────────────────────────────────────────
//  Rewind transition
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Repositions the current step onto a recorded snapshot.
    ///
    /// History contents and length are untouched; only the step pointer
    /// moves, and the mark to move is re-derived from the target step's
    /// parity. Rewinding to the current step returns an equal game.
    ///
    /// # Errors
    ///
    /// [`RewindError::StepOutOfRange`] if `step` does not index a recorded
    /// snapshot. The receiver is unchanged.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn rewind_to(&self, step: usize) -> Result<Game, RewindError> {
        RewindContract::pre(self, &step)?;

        let next = Game {
            history: self.history.clone(),
            current_step: step,
            first_mark: self.first_mark,
        };

        #[cfg(debug_assertions)]
        RewindContract::post(self, &next)?;

        debug!(step, mark = %next.to_move(), "rewound to recorded step");
        Ok(next)
    }
}

// ─────────────────────────────────────────────────────────────
//  Command dispatch
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Applies a raw boundary command, validating it first.
    ///
    /// Play commands carry raw indexes; anything outside 0-8 is rejected
    /// as [`MoveError::InvalidPosition`] before the board is consulted.
    #[instrument(skip(self))]
    pub fn dispatch(&self, command: Command) -> Result<Game, CommandError> {
        match command {
            Command::Play { position } => {
                let position = Position::from_index(position)
                    .ok_or(MoveError::InvalidPosition(position))?;
                Ok(self.play(position)?)
            }
            Command::RewindTo { step } => Ok(self.rewind_to(step)?),
        }
    }

    /// Applies a command, silently keeping the current state on rejection.
    ///
    /// This preserves the interaction model the crate was built around:
    /// clicking an occupied square, a decided board, or a stale history
    /// entry simply shows no change. Rejections are still logged at debug
    /// level for diagnosis.
    pub fn dispatch_or_ignore(&self, command: Command) -> Game {
        match self.dispatch(command) {
            Ok(next) => next,
            Err(err) => {
                debug!(%err, ?command, "ignoring rejected command");
                self.clone()
            }
        }
    }
}
