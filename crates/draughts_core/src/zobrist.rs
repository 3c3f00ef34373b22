//! Zobrist hashing for board positions.
//!
//! The hash is a pure function of the grid contents and the side to move.
//! It keys the transposition table and the repetition history, so equal
//! positions must hash equally no matter how they were reached.

use crate::types::{Piece, Square, SIZE};

const SQUARES: usize = (SIZE as usize) * (SIZE as usize);

/// Pre-computed random values for Zobrist hashing.
/// Generated using a fixed seed for reproducibility.
pub struct ZobristKeys {
    /// Random values for each piece on each square.
    /// Indexed by [color][kind][square]
    pub pieces: [[[u64; SQUARES]; 2]; 2],
    /// Random value for black to move (XOR when black's turn)
    pub side_to_move: u64,
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristKeys {
    /// Generate Zobrist keys using a simple PRNG with fixed seed.
    /// Uses xorshift64 for fast, reproducible random numbers.
    pub const fn new() -> Self {
        // Simple xorshift64 PRNG
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x9E3779B97F4A7C15u64; // Fixed seed

        // Generate piece keys
        let mut pieces = [[[0u64; SQUARES]; 2]; 2];
        let mut color = 0;
        while color < 2 {
            let mut kind = 0;
            while kind < 2 {
                let mut sq = 0;
                while sq < SQUARES {
                    state = xorshift64(state);
                    pieces[color][kind][sq] = state;
                    sq += 1;
                }
                kind += 1;
            }
            color += 1;
        }

        // Generate side to move key
        state = xorshift64(state);
        let side_to_move = state;

        ZobristKeys {
            pieces,
            side_to_move,
        }
    }

    /// Get the Zobrist key for a piece on a square.
    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: Square) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][sq.index()]
    }
}

/// Global static Zobrist keys, computed at compile time.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
