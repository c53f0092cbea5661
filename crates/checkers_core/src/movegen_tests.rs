use super::*;
use crate::board::Board;

fn board_with(pieces: &[(u8, u8, Side)]) -> Board {
    let mut board = Board::empty();
    for &(row, col, side) in pieces {
        board.set(Pos::new(row, col), Some(side)).unwrap();
    }
    board
}

fn mv(fr: u8, fc: u8, tr: u8, tc: u8) -> Move {
    Move::new(Pos::new(fr, fc), Pos::new(tr, tc))
}

#[test]
fn test_empty_board_has_no_moves() {
    let board = Board::empty();
    assert!(valid_moves(&board, Side::One).is_empty());
    assert!(valid_moves(&board, Side::Two).is_empty());
}

#[test]
fn test_sides_move_in_opposite_directions() {
    let board = board_with(&[(3, 3, Side::One), (4, 5, Side::Two)]);
    assert_eq!(
        valid_moves(&board, Side::One),
        vec![mv(3, 3, 4, 2), mv(3, 3, 4, 4)]
    );
    assert_eq!(
        valid_moves(&board, Side::Two),
        vec![mv(4, 5, 3, 4), mv(4, 5, 3, 6)]
    );
}

#[test]
fn test_occupied_target_blocks_simple_move() {
    // The toward-right step lands on the opponent and is excluded; that
    // same piece becomes the midpoint of a legal jump instead.
    let board = board_with(&[(0, 1, Side::One), (1, 2, Side::Two)]);
    assert_eq!(
        valid_moves(&board, Side::One),
        vec![mv(0, 1, 1, 0), mv(0, 1, 2, 3)]
    );
}

#[test]
fn test_jump_generated_after_simple_moves() {
    let board = board_with(&[(2, 2, Side::One), (3, 3, Side::Two)]);
    // Simple step toward-left first, then the jump over the opponent.
    assert_eq!(
        valid_moves(&board, Side::One),
        vec![mv(2, 2, 3, 1), mv(2, 2, 4, 4)]
    );
}

#[test]
fn test_no_jump_over_own_piece() {
    let board = board_with(&[(2, 2, Side::One), (3, 3, Side::One)]);
    let moves = valid_moves(&board, Side::One);
    assert!(!moves.contains(&mv(2, 2, 4, 4)));
}

#[test]
fn test_no_jump_onto_occupied_cell() {
    let board = board_with(&[(2, 2, Side::One), (3, 3, Side::Two), (4, 4, Side::Two)]);
    let moves = valid_moves(&board, Side::One);
    assert!(!moves.contains(&mv(2, 2, 4, 4)));
}

#[test]
fn test_edge_piece_stays_on_board() {
    let board = board_with(&[(0, 0, Side::One)]);
    assert_eq!(valid_moves(&board, Side::One), vec![mv(0, 0, 1, 1)]);

    let board = board_with(&[(7, 7, Side::Two)]);
    assert_eq!(valid_moves(&board, Side::Two), vec![mv(7, 7, 6, 6)]);
}

#[test]
fn test_last_row_piece_has_no_moves() {
    // A One piece on the bottom row has nowhere forward to go.
    let board = board_with(&[(7, 3, Side::One)]);
    assert!(valid_moves(&board, Side::One).is_empty());
}

#[test]
fn test_exhausted_side_yields_empty() {
    let board = board_with(&[(1, 1, Side::One), (2, 4, Side::One)]);
    assert!(valid_moves(&board, Side::Two).is_empty());
}

#[test]
fn test_scan_order_is_row_major() {
    let board = board_with(&[(4, 6, Side::One), (1, 1, Side::One)]);
    let moves = valid_moves(&board, Side::One);
    assert_eq!(
        moves,
        vec![
            mv(1, 1, 2, 0),
            mv(1, 1, 2, 2),
            mv(4, 6, 5, 5),
            mv(4, 6, 5, 7),
        ]
    );
}

#[test]
fn test_into_buffer_is_cleared_between_calls() {
    let board = board_with(&[(3, 3, Side::One)]);
    let mut buf = Vec::new();
    valid_moves_into(&board, Side::One, &mut buf);
    assert_eq!(buf.len(), 2);
    valid_moves_into(&board, Side::One, &mut buf);
    assert_eq!(buf.len(), 2);
}
