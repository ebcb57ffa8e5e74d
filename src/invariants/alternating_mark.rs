//! Alternating mark invariant.

use crate::game::Game;
use crate::invariants::Invariant;

/// Invariant: recorded moves strictly alternate marks from the opening
/// mark onward.
///
/// Every snapshot after the root must carry the move that produced it,
/// and that move's mark must match the turn parity of the step it was
/// played from. This is what lets the game derive whose turn it is from
/// the current step instead of storing it.
pub struct AlternatingMarkInvariant;

impl Invariant<Game> for AlternatingMarkInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .snapshots()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, snapshot)| {
                snapshot
                    .last_move()
                    .is_some_and(|mov| mov.player == game.to_move_at(step - 1))
            })
    }

    fn description() -> &'static str {
        "Every recorded move was played by the mark whose turn it was"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::position::Position;
    use crate::snapshot::Snapshot;
    use crate::types::Player;

    #[test]
    fn test_holds_for_fresh_game() {
        assert!(AlternatingMarkInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_holds_across_recorded_moves() {
        let game = Game::replay(&[Position::Center, Position::TopLeft, Position::BottomRight])
            .expect("legal moves");
        assert!(AlternatingMarkInvariant::holds(&game));
    }

    #[test]
    fn test_holds_when_o_opens() {
        let game = Game::starting_with(Player::O)
            .play(Position::Center)
            .expect("legal move")
            .play(Position::TopLeft)
            .expect("legal move");
        assert!(AlternatingMarkInvariant::holds(&game));
    }

    #[test]
    fn test_violated_by_wrong_opening_mark() {
        let mut game = Game::new().play(Position::Center).expect("legal move");

        // Replace X's opening move with one recorded for O.
        let forged = Snapshot::initial().apply(Move::new(Player::O, Position::Center));
        game.history.truncate_then_append(0, forged);

        assert!(!AlternatingMarkInvariant::holds(&game));
    }

    #[test]
    fn test_violated_by_missing_move_record() {
        let mut game = Game::new().play(Position::Center).expect("legal move");

        // A non-root snapshot with no move behind it.
        game.history.truncate_then_append(0, Snapshot::initial());

        assert!(!AlternatingMarkInvariant::holds(&game));
    }
}
