//! Tests for the board position enum at the rendering boundary.

use strum::IntoEnumIterator;
use tictactoe_rewind::{Board, Player, Position, Square};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_every_index_round_trips() {
    for position in Position::iter() {
        assert_eq!(Position::from_index(position.to_index()), Some(position));
    }
}

#[test]
fn test_rows_and_columns_are_one_based() {
    assert_eq!(Position::TopLeft.row(), 1);
    assert_eq!(Position::TopLeft.column(), 1);
    assert_eq!(Position::MiddleLeft.row(), 2);
    assert_eq!(Position::TopCenter.column(), 2);
    assert_eq!(Position::BottomRight.row(), 3);
    assert_eq!(Position::BottomRight.column(), 3);
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 9); // All positions valid on empty board
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Player::X));
    board.set(Position::Center, Square::Occupied(Player::O));

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7); // 2 occupied, 7 free
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_labels_name_the_square() {
    assert_eq!(Position::TopLeft.label(), "Top-left");
    assert_eq!(Position::Center.label(), "Center");
    assert_eq!(Position::Center.to_string(), "Center");
}
