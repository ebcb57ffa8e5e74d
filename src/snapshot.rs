//! Immutable board snapshots, the unit of recorded history.

use crate::action::Move;
use crate::types::{Board, Square};
use serde::{Deserialize, Serialize};

/// One fully-specified board state at a point in the game's history.
///
/// A snapshot never changes after creation. Renderers may hold onto old
/// snapshots (for example to draw the move list) and will always observe
/// the state they captured; new moves produce new snapshots instead of
/// editing stored ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board at this point of the game.
    board: Board,
    /// The move that produced this snapshot; `None` only for the root.
    last_move: Option<Move>,
}

impl Snapshot {
    /// Creates the root snapshot: an empty board with no move behind it.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Returns the board captured by this snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move that produced this snapshot, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Builds the successor snapshot produced by a move. Unchecked;
    /// `Game::play` is the validated path.
    ///
    /// The receiver's board is copied, never edited in place.
    pub fn apply(&self, mov: Move) -> Snapshot {
        let mut board = self.board.clone();
        board.set(mov.position, Square::Occupied(mov.player));
        Snapshot {
            board,
            last_move: Some(mov),
        }
    }

    /// Builds the rewind-list label for this snapshot at the given step.
    ///
    /// Step 0 gets a fixed label; every later step names the move number,
    /// the mark, and the 1-based row and column it was placed at.
    pub fn label(&self, step: usize) -> String {
        match self.last_move {
            None => "Go to game start".to_string(),
            Some(mov) => format!(
                "Go to move #{step}: {} at (row {}, col {})",
                mov.player,
                mov.position.row(),
                mov.position.column()
            ),
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Player;

    #[test]
    fn test_initial_snapshot_is_pristine() {
        let snapshot = Snapshot::initial();
        assert!(snapshot.board().squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(snapshot.last_move(), None);
    }

    #[test]
    fn test_apply_copies_instead_of_editing() {
        let root = Snapshot::initial();
        let mov = Move::new(Player::X, Position::Center);
        let next = root.apply(mov);

        assert_eq!(root.board().get(Position::Center), Square::Empty);
        assert_eq!(
            next.board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(next.last_move(), Some(mov));
    }

    #[test]
    fn test_root_label_is_fixed() {
        assert_eq!(Snapshot::initial().label(0), "Go to game start");
    }

    #[test]
    fn test_move_label_names_mark_and_coordinates() {
        let snapshot = Snapshot::initial().apply(Move::new(Player::O, Position::BottomLeft));
        assert_eq!(snapshot.label(2), "Go to move #2: O at (row 3, col 1)");
    }
}
