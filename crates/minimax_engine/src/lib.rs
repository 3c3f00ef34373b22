//! Minimax Draughts Engine
//!
//! Alpha-beta search with iterative deepening, a per-decision transposition
//! cache, and a nine-heuristic evaluation weighted by named style profiles.

mod eval;
mod profiles;
mod search;

use std::collections::HashMap;

use draughts_core::{Board, Color, Engine, Move};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use eval::{evaluate, orient};
pub use profiles::{is_monte_carlo, Weights, MONTE_CARLO, PROFILES};

/// Minimax searcher for one side.
///
/// The transposition table lives for a single `best_move` call; the
/// performance counters are reset on entry and can be read afterwards for
/// logging and match reports.
pub struct MinimaxSearcher {
    color: Color,
    max_depth: u8,
    weights: Weights,
    name: String,
    table: HashMap<search::CacheKey, search::CacheEntry>,
    rng: StdRng,
    nodes: u64,
    cache_hits: u64,
    alpha_cutoffs: u64,
    beta_cutoffs: u64,
}

impl MinimaxSearcher {
    /// Build a searcher for `color` with the given search depth and profile
    /// name. Unknown profile names fall back to Expert.
    pub fn new(color: Color, max_depth: u8, profile: &str) -> MinimaxSearcher {
        Self::with_rng(color, max_depth, profile, StdRng::from_entropy())
    }

    /// Seeded variant for deterministic tests.
    pub fn with_seed(color: Color, max_depth: u8, profile: &str, seed: u64) -> MinimaxSearcher {
        Self::with_rng(color, max_depth, profile, StdRng::seed_from_u64(seed))
    }

    fn with_rng(color: Color, max_depth: u8, profile: &str, mut rng: StdRng) -> MinimaxSearcher {
        let weights = Weights::for_profile(profile, &mut rng);
        MinimaxSearcher {
            color,
            max_depth,
            weights,
            name: format!("Minimax({profile}, depth {max_depth})"),
            table: HashMap::new(),
            rng,
            nodes: 0,
            cache_hits: 0,
            alpha_cutoffs: 0,
            beta_cutoffs: 0,
        }
    }

    /// Pick a move for the side to move, or `None` on a terminal position.
    /// The board is mutated during the search and restored before returning.
    pub fn best_move(&mut self, board: &mut Board) -> Option<Move> {
        self.reset_counters();
        self.table.clear();
        self.iterative_deepening(board)
    }

    pub fn reset_counters(&mut self) {
        self.nodes = 0;
        self.cache_hits = 0;
        self.alpha_cutoffs = 0;
        self.beta_cutoffs = 0;
    }

    /// Nodes visited during the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Transposition-cache hits during the last search.
    pub fn cache_hits(&self) -> u64 {
        self.cache_hits
    }

    /// Alpha cutoffs during the last search.
    pub fn alpha_cutoffs(&self) -> u64 {
        self.alpha_cutoffs
    }

    /// Beta cutoffs during the last search.
    pub fn beta_cutoffs(&self) -> u64 {
        self.beta_cutoffs
    }
}

impl Engine for MinimaxSearcher {
    fn best_move(&mut self, board: &mut Board) -> Option<Move> {
        MinimaxSearcher::best_move(self, board)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
