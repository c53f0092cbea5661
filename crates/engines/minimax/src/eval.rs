//! Material-count position evaluation

use checkers_core::{Board, Side};

/// Evaluates the board as a plain piece differential.
///
/// Returns `Side::One` pieces minus `Side::Two` pieces:
/// - Positive = good for the downward-moving (maximizing) side
/// - Negative = good for the upward-moving (minimizing) side
/// - 0 = equal material
///
/// Scans every cell exactly once; no positional weighting.
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0i32;
    for cell in board.cells() {
        match cell {
            Some(Side::One) => score += 1,
            Some(Side::Two) => score -= 1,
            None => {}
        }
    }
    score
}
