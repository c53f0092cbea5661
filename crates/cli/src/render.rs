//! Colored terminal board rendering.

use checkers_core::{Board, Move, Pos, Side, BOARD_SIZE};

const PIECE_ONE: &str = "\u{1b}[94m o \u{1b}[0m"; // blue
const PIECE_TWO: &str = "\u{1b}[91m x \u{1b}[0m"; // red
const HIGHLIGHT: &str = "\u{1b}[93m * \u{1b}[0m"; // yellow
const EMPTY: &str = "   ";

/// Renders the board with column letters and 1-based row labels. When a
/// move is given, its start and end cells are drawn as highlight markers.
pub fn format_board(board: &Board, highlight: Option<Move>) -> String {
    let cells: Vec<Option<Side>> = board.cells().collect();
    let mut out = String::new();
    out.push_str("   A   B   C   D   E   F   G   H\n");
    out.push_str("  +---+---+---+---+---+---+---+---+\n");
    for row in 0..BOARD_SIZE {
        out.push_str(&format!("{} |", row + 1));
        for col in 0..BOARD_SIZE {
            let pos = Pos::new(row, col);
            let marked = highlight.is_some_and(|mv| mv.from == pos || mv.to == pos);
            let cell = if marked {
                HIGHLIGHT
            } else {
                match cells[(row * BOARD_SIZE + col) as usize] {
                    Some(Side::One) => PIECE_ONE,
                    Some(Side::Two) => PIECE_TWO,
                    None => EMPTY,
                }
            };
            out.push_str(cell);
            out.push('|');
        }
        out.push('\n');
        out.push_str("  +---+---+---+---+---+---+---+---+\n");
    }
    out
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
