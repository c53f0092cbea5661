//! Minimax search with alpha-beta pruning

use checkers_core::{valid_moves_into, Board, CoreError, Move, Side};

use crate::eval::evaluate;
use crate::observer::{NullObserver, SearchObserver};

// Scores are small piece differentials and plain minimax never negates
// them, so the raw integer extremes serve as the open search window.
const NEG_INF: i32 = i32::MIN;
const POS_INF: i32 = i32::MAX;

/// Searches the board to a fixed depth and picks a move for `side`.
///
/// # Arguments
/// * `board` - The position to search
/// * `depth` - Number of plies to explore before static evaluation
/// * `side` - The side to move at the root
/// * `nodes` - Counter for nodes searched (for statistics)
///
/// # Returns
/// The score of the chosen line and the best root move. The move is None
/// when `side` has no legal move (or at depth 0), which callers must
/// treat as "no move available", not as an error.
pub fn search(
    board: &Board,
    depth: u8,
    side: Side,
    nodes: &mut u64,
) -> Result<(i32, Option<Move>), CoreError> {
    search_with_observer(board, depth, side, nodes, &mut NullObserver)
}

/// Same as [`search`], reporting move consideration, application, and
/// cutoffs to `observer`.
pub fn search_with_observer(
    board: &Board,
    depth: u8,
    side: Side,
    nodes: &mut u64,
    observer: &mut dyn SearchObserver,
) -> Result<(i32, Option<Move>), CoreError> {
    minimax(
        board,
        depth,
        side == Side::One,
        NEG_INF,
        POS_INF,
        nodes,
        observer,
    )
}

/// Recursive minimax with alpha-beta pruning.
///
/// Each child is explored on its own clone of the board; the (alpha,
/// beta) window is passed down by value and updated only between
/// siblings, so pruning is exact left-to-right.
fn minimax(
    board: &Board,
    depth: u8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
    observer: &mut dyn SearchObserver,
) -> Result<(i32, Option<Move>), CoreError> {
    let side = if maximizing { Side::One } else { Side::Two };
    let mut moves = Vec::with_capacity(32);
    valid_moves_into(board, side, &mut moves);

    // Depth horizon and no-legal-move collapse into the same terminal: a
    // stuck side scores as a neutral material count, not a loss.
    if depth == 0 || moves.is_empty() {
        return Ok((evaluate(board), None));
    }

    let mut best_score = if maximizing { NEG_INF } else { POS_INF };
    let mut best_move = None;

    for mv in moves {
        observer.move_considered(board, mv, depth);

        let mut child = board.clone();
        child.apply_move(mv)?;
        *nodes += 1;
        observer.move_applied(&child, mv);

        let (score, _) = minimax(&child, depth - 1, !maximizing, alpha, beta, nodes, observer)?;

        // Strict improvement only: among equal-best scores the first move
        // in generation order wins.
        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(best_score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = Some(mv);
            }
            beta = beta.min(best_score);
        }

        if beta <= alpha {
            observer.cutoff(depth, alpha, beta);
            break;
        }
    }

    Ok((best_score, best_move))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
