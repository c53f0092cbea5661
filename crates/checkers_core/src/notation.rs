//! External text formats: coordinate notation and the placement file.
//!
//! A coordinate is a column letter plus a 1-based row number ("B3" is
//! row 2, column 1). A placement file holds one piece per line in the
//! form `o(b3)` or `x(a1)`; blank lines are skipped.

use crate::board::Board;
use crate::types::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid coordinate '{0}'")]
    InvalidCoord(String),
    #[error("invalid line format: '{0}'")]
    InvalidLine(String),
}

/// Human-readable coordinate for a position, e.g. "B3".
pub fn pos_to_coord(pos: Pos) -> String {
    format!("{}{}", (b'A' + pos.col) as char, pos.row + 1)
}

/// Parse a coordinate, case-insensitive. Returns None for anything that
/// is not a column letter a-h followed by a row digit 1-8.
pub fn coord_to_pos(s: &str) -> Option<Pos> {
    let b = s.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let col = b[0].to_ascii_lowercase();
    let row = b[1];
    if !(b'a'..=b'h').contains(&col) || !(b'1'..=b'8').contains(&row) {
        return None;
    }
    Some(Pos::new(row - b'1', col - b'a'))
}

/// Build a board from placement text. `o` pieces belong to `Side::One`,
/// `x` pieces to `Side::Two`.
pub fn parse_placements(text: &str) -> Result<Board, NotationError> {
    let mut board = Board::empty();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let side = if line.starts_with("o(") {
            Side::One
        } else if line.starts_with("x(") {
            Side::Two
        } else {
            return Err(NotationError::InvalidLine(line.to_string()));
        };
        if !line.ends_with(')') {
            return Err(NotationError::InvalidLine(line.to_string()));
        }
        let coord = &line[2..line.len() - 1];
        let pos = coord_to_pos(coord)
            .ok_or_else(|| NotationError::InvalidCoord(coord.to_string()))?;
        board.put(pos, Some(side));
    }
    Ok(board)
}

/// Serialize a board back to placement text, one piece per line in scan
/// order.
pub fn board_to_placements(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let pos = Pos::new(row, col);
            let piece = match board.at(pos) {
                Some(Side::One) => 'o',
                Some(Side::Two) => 'x',
                None => continue,
            };
            out.push(piece);
            out.push('(');
            out.push((b'a' + pos.col) as char);
            out.push((b'1' + pos.row) as char);
            out.push(')');
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
