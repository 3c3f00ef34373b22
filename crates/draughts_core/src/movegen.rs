//! Legal move generation: quiet moves plus the mandatory maximum-capture rule.
//!
//! Captures are found with a depth-first search over jump sequences. Captured
//! pieces stay on the board while the search runs (they keep blocking sliding
//! lines, as the rules require) and are only removed when the move is applied.

use crate::board::Board;
use crate::types::{Color, Move, Piece, Square, SIZE};

/// The four diagonal directions.
const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

type Visited = [[bool; SIZE as usize]; SIZE as usize];

impl Board {
    /// All legal moves for `side`. If any capture exists anywhere on the
    /// board, only the captures taking the maximum number of pieces are
    /// legal; otherwise every quiet move is.
    pub fn legal_moves(&self, side: Color) -> Vec<Move> {
        let mut captures = Vec::new();
        let mut quiet = Vec::new();

        for row in 0..SIZE {
            for col in 0..SIZE {
                let sq = Square { row, col };
                let Some(piece) = self.piece_at(sq) else {
                    continue;
                };
                if piece.color != side {
                    continue;
                }
                find_captures(self, sq, piece, &mut captures);
                if captures.is_empty() {
                    find_quiet_moves(self, sq, piece, &mut quiet);
                }
            }
        }

        if captures.is_empty() {
            return quiet;
        }
        let max_taken = captures.iter().map(|m| m.captures.len()).max().unwrap_or(0);
        captures.retain(|m| m.captures.len() == max_taken);
        captures
    }
}

/// Quiet moves for one piece: a man steps one square along its two forward
/// diagonals; a king slides any distance along all four.
fn find_quiet_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    if piece.is_king() {
        for (dr, dc) in DIAGONALS {
            let mut next = from.offset(dr, dc);
            while let Some(to) = next {
                if board.piece_at(to).is_some() {
                    break;
                }
                out.push(Move::new(from, to));
                next = to.offset(dr, dc);
            }
        }
    } else {
        let dr = piece.color.forward();
        for dc in [-1, 1] {
            if let Some(to) = from.offset(dr, dc) {
                if board.piece_at(to).is_none() {
                    out.push(Move::new(from, to));
                }
            }
        }
    }
}

/// All maximal capture sequences starting from one piece.
fn find_captures(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let mut visited: Visited = [[false; SIZE as usize]; SIZE as usize];
    visited[from.row as usize][from.col as usize] = true;
    let mut captured = Vec::new();
    dfs_capture(board, from, from, piece, &mut visited, &mut captured, out);
}

/// Extend the current jump sequence in every direction. A sequence may not
/// revisit a landing square or capture the same piece twice; when no further
/// jump exists and something was captured, the accumulated sequence becomes a
/// move from the original start to the current landing.
fn dfs_capture(
    board: &Board,
    start: Square,
    current: Square,
    piece: Piece,
    visited: &mut Visited,
    captured: &mut Vec<Square>,
    out: &mut Vec<Move>,
) {
    let mut found_jump = false;

    for (dr, dc) in DIAGONALS {
        if piece.is_king() {
            // Scan outward: the first occupied square on the ray is the only
            // candidate. An opponent there opens every empty landing square
            // beyond it until something blocks the ray.
            let mut dist = 1;
            while let Some(target) = current.offset(dr * dist, dc * dist) {
                let Some(enemy) = board.piece_at(target) else {
                    dist += 1;
                    continue;
                };
                if !piece.is_opponent(enemy) || captured.contains(&target) {
                    break;
                }

                let mut land_dist = dist + 1;
                while let Some(landing) = current.offset(dr * land_dist, dc * land_dist) {
                    if board.piece_at(landing).is_some()
                        || visited[landing.row as usize][landing.col as usize]
                    {
                        break;
                    }
                    found_jump = true;
                    visited[landing.row as usize][landing.col as usize] = true;
                    captured.push(target);
                    dfs_capture(board, start, landing, piece, visited, captured, out);
                    captured.pop();
                    visited[landing.row as usize][landing.col as usize] = false;
                    land_dist += 1;
                }
                break;
            }
        } else {
            // A man jumps an adjacent opponent to the empty square directly
            // beyond it. Backward jumps are allowed while capturing.
            let Some(target) = current.offset(dr, dc) else {
                continue;
            };
            let Some(landing) = current.offset(2 * dr, 2 * dc) else {
                continue;
            };
            let Some(enemy) = board.piece_at(target) else {
                continue;
            };
            if !piece.is_opponent(enemy) || captured.contains(&target) {
                continue;
            }
            if board.piece_at(landing).is_some()
                || visited[landing.row as usize][landing.col as usize]
            {
                continue;
            }
            found_jump = true;
            visited[landing.row as usize][landing.col as usize] = true;
            captured.push(target);
            dfs_capture(board, start, landing, piece, visited, captured, out);
            captured.pop();
            visited[landing.row as usize][landing.col as usize] = false;
        }
    }

    if !found_jump && !captured.is_empty() {
        out.push(Move::with_captures(start, current, captured.clone()));
    }
}
