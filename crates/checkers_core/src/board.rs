use crate::error::CoreError;
use crate::types::*;

/// 8x8 grid of cells. Each cell is empty or holds one piece.
///
/// `Clone` produces a fully independent copy; the search clones a board
/// per node and mutates only its own copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Side>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Cell contents at `pos`, or `OutOfRange` if either coordinate is
    /// outside the grid. Callers construct positions arithmetically, so
    /// the range contract is checked here rather than assumed.
    pub fn get(&self, pos: Pos) -> Result<Option<Side>, CoreError> {
        if !pos.in_range() {
            return Err(CoreError::OutOfRange {
                row: pos.row,
                col: pos.col,
            });
        }
        Ok(self.cells[pos.row as usize][pos.col as usize])
    }

    /// Overwrites the cell at `pos` unconditionally. Same range contract
    /// as `get`.
    pub fn set(&mut self, pos: Pos, cell: Option<Side>) -> Result<(), CoreError> {
        if !pos.in_range() {
            return Err(CoreError::OutOfRange {
                row: pos.row,
                col: pos.col,
            });
        }
        self.cells[pos.row as usize][pos.col as usize] = cell;
        Ok(())
    }

    /// Unchecked read for in-range positions produced by `Pos::offset` or
    /// the 0..8 scan loops.
    pub(crate) fn at(&self, pos: Pos) -> Option<Side> {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Unchecked write, same contract as `at`.
    pub(crate) fn put(&mut self, pos: Pos, cell: Option<Side>) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    /// Row-major iterator over all 64 cells.
    pub fn cells(&self) -> impl Iterator<Item = Option<Side>> + '_ {
        self.cells.iter().flatten().copied()
    }

    pub fn count(&self, side: Side) -> u32 {
        self.cells().filter(|&c| c == Some(side)).count() as u32
    }

    /// Relocates the piece at `mv.from` to `mv.to`, clearing the origin.
    /// For a jump the captured piece at the midpoint is removed. All
    /// positions are range-checked before any cell is touched.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), CoreError> {
        let piece = self.get(mv.from)?;
        self.get(mv.to)?;
        if let Some(mid) = mv.captured() {
            self.set(mid, None)?;
        }
        self.put(mv.to, piece);
        self.put(mv.from, None);
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
