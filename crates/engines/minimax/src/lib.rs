//! Minimax Checkers Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a material-count
//! evaluation. Both the CLI and the HTTP front end consume this one
//! engine through the `checkers_core::Engine` trait.

mod eval;
mod observer;
mod search;

use checkers_core::{Board, CoreError, Engine, SearchResult, Side};


/// Checkers engine using two-sided minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Depth-bounded minimax, ties broken by generation order
/// - Piece-differential material evaluation
/// - A fresh board clone per node (no shared mutable state)
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, side: Side, depth: u8) -> Result<SearchResult, CoreError> {
        self.nodes = 0;
        let (score, best_move) = search::search(board, depth, side, &mut self.nodes)?;

        Ok(SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
        })
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::evaluate;
pub use observer::{NullObserver, SearchObserver};
pub use search::{search, search_with_observer};
