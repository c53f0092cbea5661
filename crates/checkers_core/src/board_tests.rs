use super::*;
use crate::error::CoreError;
use crate::types::{Move, Pos, Side};

#[test]
fn test_get_set_round_trip() {
    let mut board = Board::empty();
    let pos = Pos::new(3, 4);
    assert_eq!(board.get(pos), Ok(None));
    board.set(pos, Some(Side::One)).unwrap();
    assert_eq!(board.get(pos), Ok(Some(Side::One)));
    board.set(pos, None).unwrap();
    assert_eq!(board.get(pos), Ok(None));
}

#[test]
fn test_out_of_range_rejected() {
    let mut board = Board::empty();
    assert_eq!(
        board.get(Pos::new(8, 0)),
        Err(CoreError::OutOfRange { row: 8, col: 0 })
    );
    assert_eq!(
        board.set(Pos::new(0, 8), Some(Side::Two)),
        Err(CoreError::OutOfRange { row: 0, col: 8 })
    );
}

#[test]
fn test_clone_is_deep() {
    let mut board = Board::empty();
    board.set(Pos::new(1, 1), Some(Side::One)).unwrap();
    let mut copy = board.clone();
    copy.set(Pos::new(1, 1), None).unwrap();
    copy.set(Pos::new(5, 5), Some(Side::Two)).unwrap();
    // The original is untouched by mutations of the copy.
    assert_eq!(board.get(Pos::new(1, 1)), Ok(Some(Side::One)));
    assert_eq!(board.get(Pos::new(5, 5)), Ok(None));
}

#[test]
fn test_apply_simple_move_only_touches_endpoints() {
    let mut board = Board::empty();
    board.set(Pos::new(2, 2), Some(Side::One)).unwrap();
    board.set(Pos::new(6, 6), Some(Side::Two)).unwrap();

    let mut expected = Board::empty();
    expected.set(Pos::new(3, 1), Some(Side::One)).unwrap();
    expected.set(Pos::new(6, 6), Some(Side::Two)).unwrap();

    board
        .apply_move(Move::new(Pos::new(2, 2), Pos::new(3, 1)))
        .unwrap();
    assert_eq!(board, expected);
}

#[test]
fn test_apply_jump_removes_captured_midpoint() {
    let mut board = Board::empty();
    board.set(Pos::new(2, 2), Some(Side::One)).unwrap();
    board.set(Pos::new(3, 3), Some(Side::Two)).unwrap();

    board
        .apply_move(Move::new(Pos::new(2, 2), Pos::new(4, 4)))
        .unwrap();

    assert_eq!(board.get(Pos::new(2, 2)), Ok(None));
    assert_eq!(board.get(Pos::new(3, 3)), Ok(None));
    assert_eq!(board.get(Pos::new(4, 4)), Ok(Some(Side::One)));
    assert_eq!(board.count(Side::One), 1);
    assert_eq!(board.count(Side::Two), 0);
}

#[test]
fn test_apply_move_out_of_range_fails() {
    let mut board = Board::empty();
    board.set(Pos::new(7, 7), Some(Side::One)).unwrap();
    let err = board
        .apply_move(Move::new(Pos::new(7, 7), Pos::new(8, 8)))
        .unwrap_err();
    assert_eq!(err, CoreError::OutOfRange { row: 8, col: 8 });
    // The failed apply left the board untouched.
    assert_eq!(board.get(Pos::new(7, 7)), Ok(Some(Side::One)));
}

#[test]
fn test_count_per_side() {
    let mut board = Board::empty();
    for col in 0..4 {
        board.set(Pos::new(0, col), Some(Side::One)).unwrap();
    }
    board.set(Pos::new(7, 0), Some(Side::Two)).unwrap();
    assert_eq!(board.count(Side::One), 4);
    assert_eq!(board.count(Side::Two), 1);
}
