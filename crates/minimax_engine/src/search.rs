//! Minimax search with alpha-beta pruning, iterative deepening, and a
//! per-decision transposition cache.

use std::cmp::Ordering;

use draughts_core::{Board, Color, Move};
use rand::seq::SliceRandom;

use crate::eval::evaluate;
use crate::MinimaxSearcher;

/// Cache key for one evaluated node. Depth and the maximizing flag are part
/// of the key: the stored score is depth-bounded and side-relative, so mixing
/// them would produce unsound cutoffs.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct CacheKey {
    hash: u64,
    depth: u8,
    maximizing: bool,
    engine: Color,
}

#[derive(Clone)]
pub(crate) struct CacheEntry {
    score: f64,
    mv: Option<Move>,
}

impl MinimaxSearcher {
    /// Iterative deepening: search at depth 1, then 2, up to the configured
    /// maximum, returning the move from the deepest completed search. The
    /// shallow iterations seed the transposition cache that move ordering
    /// feeds on.
    pub(crate) fn iterative_deepening(&mut self, board: &mut Board) -> Option<Move> {
        let mut best = None;
        for depth in 1..=self.max_depth {
            let (_, mv) = self.alphabeta(board, depth, f64::NEG_INFINITY, f64::INFINITY, true);
            if mv.is_some() {
                best = mv;
            }
        }
        best
    }

    fn cache_key(&self, board: &Board, depth: u8, maximizing: bool) -> CacheKey {
        CacheKey {
            hash: board.hash(),
            depth,
            maximizing,
            engine: self.color,
        }
    }

    fn alphabeta(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> (f64, Option<Move>) {
        self.nodes += 1;

        let key = self.cache_key(board, depth, maximizing);
        if let Some(entry) = self.table.get(&key) {
            let cached = (entry.score, entry.mv.clone());
            self.cache_hits += 1;
            return cached;
        }

        if depth == 0 || board.is_terminal() {
            return (evaluate(board, &self.weights, self.color), None);
        }

        let mut moves = board.legal_moves(board.side_to_move());
        if moves.is_empty() {
            return (evaluate(board, &self.weights, self.color), None);
        }
        self.order_moves(board, &mut moves, depth, maximizing);

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_moves: Vec<Move> = Vec::new();

        for mv in &moves {
            let undo = board.make(mv);
            let mover = board.side_to_move();
            board.set_side_to_move(mover.other());
            let (score, _) = self.alphabeta(board, depth - 1, alpha, beta, !maximizing);
            board.set_side_to_move(mover);
            board.undo(undo);

            if maximizing {
                if score > best {
                    best = score;
                    best_moves.clear();
                    best_moves.push(mv.clone());
                } else if score == best {
                    best_moves.push(mv.clone());
                }
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.alpha_cutoffs += 1;
                    break;
                }
            } else {
                if score < best {
                    best = score;
                    best_moves.clear();
                    best_moves.push(mv.clone());
                } else if score == best {
                    best_moves.push(mv.clone());
                }
                beta = beta.min(score);
                if beta <= alpha {
                    self.beta_cutoffs += 1;
                    break;
                }
            }
        }

        // Equal-score moves are broken uniformly at random; this is what
        // keeps games varied between otherwise identical searchers.
        let chosen = best_moves.choose(&mut self.rng).cloned();
        self.table.insert(
            key,
            CacheEntry {
                score: best,
                mv: chosen.clone(),
            },
        );
        (best, chosen)
    }

    /// Captures first (50 per captured piece), then whatever the cache
    /// already knows about the child position from a shallower iteration.
    fn order_moves(&mut self, board: &mut Board, moves: &mut Vec<Move>, depth: u8, maximizing: bool) {
        let mut scored: Vec<(Move, f64)> = Vec::with_capacity(moves.len());

        for mv in moves.drain(..) {
            let mut score = 0.0;
            if mv.is_capture() {
                score += mv.captures.len() as f64 * 50.0;
            }

            let undo = board.make(&mv);
            let mover = board.side_to_move();
            board.set_side_to_move(mover.other());
            let child_key = self.cache_key(board, depth.saturating_sub(1), !maximizing);
            if let Some(entry) = self.table.get(&child_key) {
                score += entry.score;
            }
            board.set_side_to_move(mover);
            board.undo(undo);

            scored.push((mv, score));
        }

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        moves.extend(scored.into_iter().map(|(mv, _)| mv));
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
