//! Static evaluation: nine weighted heuristics.
//!
//! Every heuristic returns a raw score with Black-favourable positive and
//! White-favourable negative. `evaluate` sums them under the profile weights
//! and orients the result for the engine's colour, so positive is always
//! good for the engine.

use draughts_core::{Board, Color, GameStatus, Piece, Square, SIZE};

use crate::profiles::Weights;

/// Raw score of a won terminal position.
const WIN_SCORE: f64 = 10_000.0;

const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// The four pure-centre squares.
const CENTER: [(u8, u8); 4] = [(4, 4), (4, 5), (5, 4), (5, 5)];

/// Corner-trap squares where a king's mobility collapses.
const CORNER_TRAPS: [(u8, u8); 8] = [
    (0, 1),
    (1, 0),
    (0, 3),
    (3, 0),
    (9, 8),
    (8, 9),
    (9, 6),
    (6, 9),
];

/// Evaluate `board` for the engine playing `engine`.
pub fn evaluate(board: &Board, weights: &Weights, engine: Color) -> f64 {
    if board.is_terminal() {
        let raw = match board.winner() {
            GameStatus::Won(Color::White) => -WIN_SCORE,
            GameStatus::Won(Color::Black) => WIN_SCORE,
            _ => 0.0,
        };
        return orient(raw, engine);
    }

    let raw = weights.material * material(board)
        + weights.central * central_control(board)
        + weights.structure * structure(board)
        + weights.mobility * mobility(board)
        + weights.king_activity * king_activity(board)
        + weights.promotion * promotion_potential(board)
        + weights.safety * piece_safety(board)
        + weights.tempo * tempo(board)
        + weights.locks * lock_positions(board);
    orient(raw, engine)
}

/// Raw scores are Black-positive; a White engine sees them negated.
#[inline]
pub fn orient(raw: f64, engine: Color) -> f64 {
    match engine {
        Color::Black => raw,
        Color::White => -raw,
    }
}

#[inline]
fn signed(color: Color, value: f64) -> f64 {
    match color {
        Color::Black => value,
        Color::White => -value,
    }
}

fn pieces(board: &Board) -> impl Iterator<Item = (Square, Piece)> + '_ {
    (0..SIZE).flat_map(move |row| {
        (0..SIZE).filter_map(move |col| {
            let sq = Square { row, col };
            board.piece_at(sq).map(|piece| (sq, piece))
        })
    })
}

/// Men count 1, kings 3.
fn material(board: &Board) -> f64 {
    let mut value = 0.0;
    for (_, piece) in pieces(board) {
        let v = if piece.is_king() { 3.0 } else { 1.0 };
        value += signed(piece.color, v);
    }
    value
}

/// 3 per piece on the four centre squares, 1 on the wider 4x4 ring.
fn central_control(board: &Board) -> f64 {
    let mut score = 0.0;
    for (sq, piece) in pieces(board) {
        let bonus = if CENTER.contains(&(sq.row, sq.col)) {
            3.0
        } else if (3..=6).contains(&sq.row) && (3..=6).contains(&sq.col) {
            1.0
        } else {
            0.0
        };
        score += signed(piece.color, bonus);
    }
    score
}

/// Men with no diagonal neighbour are isolated (-2); men with an ally on a
/// backward diagonal are supported (+2). Kings are skipped.
fn structure(board: &Board) -> f64 {
    let mut score = 0.0;
    for (sq, piece) in pieces(board) {
        if piece.is_king() {
            continue;
        }

        let isolated = !DIAGONALS.iter().any(|&(dr, dc)| {
            sq.offset(dr, dc)
                .and_then(|n| board.piece_at(n))
                .is_some_and(|q| !piece.is_opponent(q))
        });
        if isolated {
            score += signed(piece.color, -2.0);
        }

        let backward = -piece.color.forward();
        let supported = [-1, 1].iter().any(|&dc| {
            sq.offset(backward, dc)
                .and_then(|n| board.piece_at(n))
                .is_some_and(|q| !piece.is_opponent(q))
        });
        if supported {
            score += signed(piece.color, 2.0);
        }
    }
    score
}

/// Legal-move count difference, Black minus White.
fn mobility(board: &Board) -> f64 {
    let black = board.legal_moves(Color::Black).len() as f64;
    let white = board.legal_moves(Color::White).len() as f64;
    black - white
}

/// Kings away from the edges with open diagonals are active: distance to the
/// nearest edge plus 0.2 per reachable empty square.
fn king_activity(board: &Board) -> f64 {
    let mut score = 0.0;
    for (sq, piece) in pieces(board) {
        if !piece.is_king() {
            continue;
        }

        let edge = sq
            .row
            .min(SIZE - 1 - sq.row)
            .min(sq.col)
            .min(SIZE - 1 - sq.col);

        let mut free_steps = 0u32;
        for (dr, dc) in DIAGONALS {
            let mut next = sq.offset(dr, dc);
            while let Some(n) = next {
                if board.piece_at(n).is_some() {
                    break;
                }
                free_steps += 1;
                next = n.offset(dr, dc);
            }
        }

        score += signed(piece.color, edge as f64 + free_steps as f64 * 0.2);
    }
    score
}

/// The closer a man sits to the far end of its promotion run, the higher the
/// magnitude.
fn promotion_potential(board: &Board) -> f64 {
    let mut score = 0.0;
    for (sq, piece) in pieces(board) {
        if piece.is_king() {
            continue;
        }
        let dist = match piece.color {
            Color::Black => (SIZE - 1 - sq.row) as f64,
            Color::White => sq.row as f64,
        };
        score += signed(piece.color, SIZE as f64 - dist);
    }
    score
}

/// -4 per hanging piece: an adjacent opponent with the square immediately
/// beyond it empty means an immediate single-jump capture is available.
fn piece_safety(board: &Board) -> f64 {
    let mut score = 0.0;
    for (sq, piece) in pieces(board) {
        if is_hanging(board, sq, piece) {
            score += signed(piece.color, -4.0);
        }
    }
    score
}

fn is_hanging(board: &Board, sq: Square, piece: Piece) -> bool {
    DIAGONALS.iter().any(|&(dr, dc)| {
        let neighbour = sq.offset(dr, dc).and_then(|n| board.piece_at(n));
        let beyond = sq.offset(2 * dr, 2 * dc);
        match (neighbour, beyond) {
            (Some(q), Some(landing)) => {
                piece.is_opponent(q) && board.piece_at(landing).is_none()
            }
            _ => false,
        }
    })
}

/// Rewards sheer row advancement, independent of the promotion weighting.
fn tempo(board: &Board) -> f64 {
    let mut score = 0.0;
    for (sq, piece) in pieces(board) {
        if piece.is_king() {
            continue;
        }
        match piece.color {
            Color::Black => score += sq.row as f64,
            Color::White => score -= (SIZE - 1 - sq.row) as f64,
        }
    }
    score
}

/// -8 per king buried on a corner-trap square.
fn lock_positions(board: &Board) -> f64 {
    let mut score = 0.0;
    for &(row, col) in &CORNER_TRAPS {
        let sq = Square { row, col };
        if let Some(piece) = board.piece_at(sq) {
            if piece.is_king() {
                score += signed(piece.color, -8.0);
            }
        }
    }
    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
