use crate::board::Board;
use crate::types::*;

/// Generate every move available to `side`, returning a freshly allocated
/// vector. Internally delegates to `valid_moves_into`.
pub fn valid_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    valid_moves_into(board, side, &mut out);
    out
}

/// Generate every move available to `side` into the provided buffer,
/// reusing it across calls.
///
/// Enumeration order is part of the contract (it fixes search
/// tie-breaking): scan rows 0..7 then columns 0..7; for each piece, the
/// two simple steps toward-left then toward-right, then the two jumps in
/// the same order. An empty result means `side` has no move, which is a
/// terminal condition rather than an error.
pub fn valid_moves_into(board: &Board, side: Side, out: &mut Vec<Move>) {
    out.clear();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let from = Pos::new(row, col);
            if board.at(from) != Some(side) {
                continue;
            }
            gen_piece(board, from, side, out);
        }
    }
}

fn gen_piece(board: &Board, from: Pos, side: Side, out: &mut Vec<Move>) {
    let dir = side.forward();

    // Simple diagonal steps into an empty cell.
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            if board.at(to).is_none() {
                out.push(Move::new(from, to));
            }
        }
    }

    // Single jumps: midpoint holds an opponent piece, landing cell empty.
    // The capture itself happens when the move is applied.
    for dc in [-1i8, 1] {
        let mid = from.offset(dir, dc);
        let to = from.offset(2 * dir, 2 * dc);
        if let (Some(mid), Some(to)) = (mid, to) {
            if board.at(mid) == Some(side.other()) && board.at(to).is_none() {
                out.push(Move::new(from, to));
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
