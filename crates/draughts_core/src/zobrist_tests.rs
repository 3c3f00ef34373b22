use super::*;
use crate::types::{Color, Piece};

#[test]
fn test_zobrist_keys_unique() {
    // Verify that piece keys are unique (no collisions in the full table)
    let mut seen = std::collections::HashSet::new();

    for color in 0..2 {
        for kind in 0..2 {
            for sq in 0..SQUARES {
                let key = ZOBRIST.pieces[color][kind][sq];
                assert!(seen.insert(key), "Duplicate Zobrist key found");
            }
        }
    }

    assert!(
        seen.insert(ZOBRIST.side_to_move),
        "Side to move key collision"
    );
}

#[test]
fn test_zobrist_piece_key() {
    let piece = Piece::man(Color::White);
    let a = Square { row: 0, col: 1 };
    let b = Square { row: 0, col: 3 };
    assert_ne!(ZOBRIST.piece_key(piece, a), ZOBRIST.piece_key(piece, b));
    assert_ne!(
        ZOBRIST.piece_key(Piece::man(Color::White), a),
        ZOBRIST.piece_key(Piece::king(Color::White), a)
    );
}
