//! Tests for transition contracts and the invariant set on the public
//! surface.

use tictactoe_rewind::{
    AlternatingMarkInvariant, Contract, Game, GameInvariants, Invariant, InvariantSet,
    LegalMove, Move, MoveContract, MoveError, Player, Position, RootedHistoryInvariant,
    SnapshotLineageInvariant, StepInHistory,
};

#[test]
fn test_legal_move_passes_on_a_fresh_board() {
    let game = Game::new();
    let action = Move::new(Player::X, Position::Center);

    assert!(LegalMove::check(&action, &game).is_ok());
    assert!(MoveContract::pre(&game, &action).is_ok());
}

#[test]
fn test_decided_game_outranks_occupancy() {
    // X holds the top row; O clicks the occupied top-left square.
    let game = Game::replay(&[
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ])
    .unwrap();

    let action = Move::new(Player::O, Position::TopLeft);
    assert!(matches!(
        LegalMove::check(&action, &game),
        Err(MoveError::GameDecided(Player::X))
    ));
}

#[test]
fn test_step_bounds_track_the_history_length() {
    let game = Game::new().play(Position::Center).unwrap();

    assert!(StepInHistory::check(0, &game).is_ok());
    assert!(StepInHistory::check(1, &game).is_ok());
    assert!(StepInHistory::check(2, &game).is_err());
}

#[test]
fn test_move_postcondition_accepts_a_real_transition() {
    let before = Game::new();
    let after = before.play(Position::Center).unwrap();

    assert!(MoveContract::post(&before, &after).is_ok());
}

#[test]
fn test_move_postcondition_rejects_a_stalled_transition() {
    let game = Game::new();

    // Passing the same state as before and after means no snapshot was
    // appended, which the history-length postcondition catches.
    assert!(matches!(
        MoveContract::post(&game, &game),
        Err(MoveError::InvariantViolation(_))
    ));
}

#[test]
fn test_invariants_hold_across_a_full_game() {
    let mut game = Game::new();
    for position in [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::BottomLeft,
        Position::MiddleRight,
        Position::BottomRight,
        Position::BottomCenter,
    ] {
        game = game.play(position).unwrap();
        assert!(GameInvariants::check_all(&game).is_ok());
    }
}

#[test]
fn test_invariants_hold_after_rewind_and_branch() {
    let game = Game::replay(&[Position::Center, Position::TopLeft, Position::BottomRight])
        .unwrap()
        .rewind_to(1)
        .unwrap()
        .play(Position::MiddleLeft)
        .unwrap();

    assert!(GameInvariants::check_all(&game).is_ok());
}

#[test]
fn test_invariant_set_reports_doctored_state() {
    let game = Game::new().play(Position::Center).unwrap();

    // Point the current step past the recorded history.
    let mut value = serde_json::to_value(&game).unwrap();
    value["current_step"] = serde_json::json!(7);
    let doctored: Game = serde_json::from_value(value).unwrap();

    let violations = GameInvariants::check_all(&doctored).unwrap_err();
    assert!(violations
        .iter()
        .any(|v| v.description == RootedHistoryInvariant::description()));
}

#[test]
fn test_invariant_descriptions_name_their_property() {
    assert!(RootedHistoryInvariant::description().contains("step"));
    assert!(AlternatingMarkInvariant::description().contains("mark"));
    assert!(SnapshotLineageInvariant::description().contains("parent"));
}

#[test]
fn test_rejected_transitions_never_mutate_the_receiver() {
    let game = Game::new().play(Position::Center).unwrap();
    let before = game.clone();

    let _ = game.play(Position::Center);
    let _ = game.rewind_to(9);

    assert_eq!(game, before);
    assert!(GameInvariants::check_all(&game).is_ok());
}
