/// Board edge length. The grid is always 8x8.
pub const BOARD_SIZE: u8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Moves downward (increasing row); the maximizing player.
    One,
    /// Moves upward (decreasing row); the minimizing player.
    Two,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// Row delta for a forward step. Direction is derived from side
    /// identity alone, never stored separately.
    pub fn forward(self) -> i8 {
        match self {
            Side::One => 1,
            Side::Two => -1,
        }
    }
}

/// A board coordinate. Rows run 0..7 top-to-bottom, columns 0..7
/// left-to-right. A `Pos` is plain data and may hold out-of-range
/// coordinates; `Board::get`/`set` reject those.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Range-checked coordinate arithmetic: the offset position, or None
    /// if it falls off the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Pos> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn in_range(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

/// One piece relocation: a single diagonal step, or a two-square jump
/// over an opponent piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
}

impl Move {
    pub fn new(from: Pos, to: Pos) -> Self {
        Self { from, to }
    }

    /// True for two-square jumps, which capture the piece at the midpoint.
    pub fn is_jump(&self) -> bool {
        (self.to.row as i8 - self.from.row as i8).abs() == 2
    }

    /// Midpoint cell captured by a jump, None for a simple step.
    pub fn captured(&self) -> Option<Pos> {
        if self.is_jump() {
            Some(Pos::new(
                (self.from.row + self.to.row) / 2,
                (self.from.col + self.to.col) / 2,
            ))
        } else {
            None
        }
    }
}
