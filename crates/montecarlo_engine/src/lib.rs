//! Monte-Carlo Draughts Engine
//!
//! A flat Monte-Carlo move evaluator: every legal move is scored by playing
//! uniform-random games to the end, and the move with the best mean outcome
//! wins. No heuristics and no domain knowledge beyond the rules.

use draughts_core::{Board, Color, Engine, GameStatus, Move};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};


/// Random playouts stop after this many plies and score as a draw.
const ROLLOUT_PLY_CAP: u32 = 400;

/// Monte-Carlo searcher for one side.
pub struct MonteCarloSearcher {
    color: Color,
    simulations: u32,
    rng: StdRng,
    name: String,
    best_score: f64,
}

impl MonteCarloSearcher {
    /// Build a searcher for `color` running `simulations` random games per
    /// decision.
    pub fn new(color: Color, simulations: u32) -> MonteCarloSearcher {
        Self::with_rng(color, simulations, StdRng::from_entropy())
    }

    /// Seeded variant for deterministic tests.
    pub fn with_seed(color: Color, simulations: u32, seed: u64) -> MonteCarloSearcher {
        Self::with_rng(color, simulations, StdRng::seed_from_u64(seed))
    }

    fn with_rng(color: Color, simulations: u32, rng: StdRng) -> MonteCarloSearcher {
        MonteCarloSearcher {
            color,
            simulations,
            rng,
            name: format!("MonteCarlo({simulations} sims)"),
            best_score: 0.0,
        }
    }

    /// Mean outcome of the move chosen by the last `best_move` call.
    pub fn best_score(&self) -> f64 {
        self.best_score
    }

    /// Pick a move for the side to move, or `None` on a terminal position.
    /// The caller's board is never mutated; every simulation plays on a copy.
    pub fn best_move(&mut self, board: &Board) -> Option<Move> {
        let moves = board.legal_moves(board.side_to_move());
        if moves.is_empty() {
            return None;
        }

        // A one-visit prior per move avoids division by zero and gives every
        // candidate a baseline.
        let mut scores = vec![0.0f64; moves.len()];
        let mut counts = vec![1u32; moves.len()];

        for _ in 0..self.simulations {
            let idx = self.rng.gen_range(0..moves.len());
            let result = self.simulate(board, &moves[idx]);
            scores[idx] += result;
            counts[idx] += 1;
        }

        let mut best_mean = f64::NEG_INFINITY;
        let mut best: Vec<usize> = Vec::new();
        for (idx, (&score, &count)) in scores.iter().zip(&counts).enumerate() {
            let mean = score / count as f64;
            if mean > best_mean {
                best_mean = mean;
                best.clear();
                best.push(idx);
            } else if mean == best_mean {
                best.push(idx);
            }
        }

        self.best_score = best_mean;
        let chosen = best[self.rng.gen_range(0..best.len())];
        Some(moves[chosen].clone())
    }

    /// Play `mv` on a copy of the board and roll the game out. Returns +1 if
    /// the engine won, 0 for a draw, -1 if it lost.
    fn simulate(&mut self, board: &Board, mv: &Move) -> f64 {
        let mut sim = board.clone();
        let mover = sim.side_to_move();
        sim.apply(mv);
        sim.set_side_to_move(mover.other());
        match self.rollout(&mut sim) {
            Some(winner) if winner == self.color => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        }
    }

    /// Uniform-random play with alternating sides, up to the ply cap. A side
    /// with no legal moves loses; reaching the cap scores as a draw. The
    /// repetition and quiet-move draw rules are not consulted here; random
    /// play would drift into long draws and the cap already bounds those.
    fn rollout(&mut self, board: &mut Board) -> Option<Color> {
        for _ in 0..ROLLOUT_PLY_CAP {
            let current = board.side_to_move();
            let moves = board.legal_moves(current);
            if moves.is_empty() {
                return Some(current.other());
            }

            let mv = &moves[self.rng.gen_range(0..moves.len())];
            board.apply(mv);
            board.set_side_to_move(current.other());

            if board.is_terminal() {
                return match board.winner() {
                    GameStatus::Won(winner) => Some(winner),
                    _ => None,
                };
            }
        }
        None
    }
}

impl Engine for MonteCarloSearcher {
    fn best_move(&mut self, board: &mut Board) -> Option<Move> {
        MonteCarloSearcher::best_move(self, board)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
