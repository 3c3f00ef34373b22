pub mod board;
pub mod movegen;
pub mod perft;
pub mod types;
pub mod zobrist;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use perft::perft;
pub use types::*;
pub use zobrist::ZOBRIST;

// =============================================================================
// Engine trait — implemented by all draughts engines (minimax, Monte-Carlo)
// =============================================================================

/// Trait that all draughts engines implement.
///
/// This allows drivers to swap between the minimax profiles and the
/// Monte-Carlo searcher behind one interface.
pub trait Engine {
    /// Pick a move for the side to move, or `None` on a terminal position.
    ///
    /// A searcher may mutate the board while thinking (make/undo), but the
    /// board it hands back must be identical to the board it was given.
    fn best_move(&mut self, board: &mut Board) -> Option<Move>;

    /// Engine name for match reports.
    fn name(&self) -> &str;
}
