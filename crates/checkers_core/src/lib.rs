pub mod board;
pub mod error;
pub mod movegen;
pub mod notation;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::CoreError;
pub use movegen::*;
pub use notation::{board_to_placements, coord_to_pos, parse_placements, pos_to_coord, NotationError};
pub use types::*;

// =============================================================================
// Engine trait — implemented by all checkers engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves for the side to move)
    pub best_move: Option<Move>,
    /// Piece-differential score, positive favoring the downward side
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

/// Trait that all checkers engines must implement.
///
/// This is the seam between front ends (CLI, HTTP) and engine
/// implementations, so either can be swapped independently.
pub trait Engine: Send {
    /// Search the position and pick a move for `side`.
    ///
    /// A `best_move` of None means `side` has no legal move, a valid
    /// outcome the caller must check for rather than an error. `Err` is
    /// reserved for out-of-range positions, which indicate caller misuse.
    fn search(&mut self, board: &Board, side: Side, depth: u8) -> Result<SearchResult, CoreError>;

    /// Returns the engine's name for identification
    fn name(&self) -> &str;

    /// Reset internal state for a new game (clear counters, etc.)
    fn new_game(&mut self) {}
}
