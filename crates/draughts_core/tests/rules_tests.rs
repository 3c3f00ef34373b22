//! Tests for the board rules: apply/make/undo, promotion, mandatory capture,
//! and the FMJD draw conditions.

use draughts_core::{Board, Color, GameStatus, Move, Piece, Square};

fn sq(row: u8, col: u8) -> Square {
    Square { row, col }
}

// =============================================================================
// Initial position
// =============================================================================

#[test]
fn test_initial_position() {
    let board = Board::new();
    assert_eq!(board.count_pieces(), (20, 20));
    assert_eq!(board.side_to_move(), Color::White);
    assert_eq!(board.quiet_moves(), 0);
    // Pieces only on dark squares, middle rows empty
    for row in 0..10 {
        for col in 0..10 {
            let piece = board.piece_at(sq(row, col));
            if !sq(row, col).is_dark() || (4..6).contains(&row) {
                assert!(piece.is_none(), "({},{}) should be empty", row, col);
            }
        }
    }
}

#[test]
fn test_out_of_range_squares_are_ignored() {
    let mut board = Board::new();
    let before = board.clone();

    // Squares built directly can lie off the board; reads answer None and
    // writes do nothing
    assert!(board.piece_at(sq(10, 3)).is_none());
    assert!(board.piece_at(sq(3, 10)).is_none());
    assert!(board.piece_at(sq(255, 255)).is_none());

    board.set_piece(sq(10, 3), Some(Piece::man(Color::White)));
    board.set_piece(sq(3, 10), None);
    assert_eq!(board, before);
}

// =============================================================================
// make / undo
// =============================================================================

#[test]
fn test_make_undo_roundtrips_every_root_move() {
    let mut board = Board::new();
    let before = board.clone();
    for mv in board.legal_moves(Color::White) {
        let undo = board.make(&mv);
        assert_ne!(board, before, "{} should change the board", mv);
        board.undo(undo);
        assert_eq!(board, before, "{} did not round-trip", mv);
        assert_eq!(board.hash(), before.hash());
    }
}

#[test]
fn test_make_undo_restores_captured_pieces() {
    let mut board = Board::empty();
    board.set_piece(sq(4, 3), Some(Piece::man(Color::White)));
    board.set_piece(sq(5, 4), Some(Piece::man(Color::Black)));
    let before = board.clone();

    let moves = board.legal_moves(Color::White);
    assert_eq!(moves.len(), 1);
    let undo = board.make(&moves[0]);
    assert_eq!(board.count_pieces(), (1, 0));
    board.undo(undo);
    assert_eq!(board, before);
}

#[test]
fn test_make_undo_reverts_promotion() {
    let mut board = Board::empty();
    board.set_piece(sq(7, 2), Some(Piece::man(Color::White)));
    board.set_piece(sq(8, 3), Some(Piece::man(Color::Black)));
    let before = board.clone();

    // The jump lands on row 9, so the man promotes
    let moves = board.legal_moves(Color::White);
    assert_eq!(moves.len(), 1);
    let undo = board.make(&moves[0]);
    let promoted = board.piece_at(sq(9, 4)).expect("piece on landing square");
    assert!(promoted.is_king());

    board.undo(undo);
    assert_eq!(board, before);
    let restored = board.piece_at(sq(7, 2)).expect("piece back on start");
    assert!(!restored.is_king());
}

// =============================================================================
// apply: promotion and the quiet-move counter
// =============================================================================

#[test]
fn test_apply_promotes_on_last_row_only() {
    let mut board = Board::empty();
    board.set_piece(sq(8, 3), Some(Piece::man(Color::White)));
    board.apply(&Move::new(sq(8, 3), sq(9, 4)));
    assert!(board.piece_at(sq(9, 4)).expect("promoted man").is_king());

    let mut board = Board::empty();
    board.set_piece(sq(6, 3), Some(Piece::man(Color::White)));
    board.apply(&Move::new(sq(6, 3), sq(7, 4)));
    assert!(!board.piece_at(sq(7, 4)).expect("moved man").is_king());
}

#[test]
fn test_quiet_counter_tracks_king_moves() {
    let mut board = Board::empty();
    board.set_piece(sq(0, 1), Some(Piece::king(Color::White)));
    board.set_piece(sq(9, 8), Some(Piece::king(Color::Black)));
    board.set_piece(sq(4, 1), Some(Piece::man(Color::White)));

    board.apply(&Move::new(sq(0, 1), sq(1, 0)));
    assert_eq!(board.quiet_moves(), 1);
    board.apply(&Move::new(sq(9, 8), sq(8, 9)));
    assert_eq!(board.quiet_moves(), 2);

    // A man moving resets the counter
    board.apply(&Move::new(sq(4, 1), sq(5, 2)));
    assert_eq!(board.quiet_moves(), 0);

    board.apply(&Move::new(sq(1, 0), sq(0, 1)));
    assert_eq!(board.quiet_moves(), 1);

    // A capture resets it too
    board.set_piece(sq(6, 3), Some(Piece::man(Color::Black)));
    board.apply(&Move::with_captures(sq(5, 2), sq(7, 4), vec![sq(6, 3)]));
    assert_eq!(board.quiet_moves(), 0);
}

// =============================================================================
// Forced captures
// =============================================================================

#[test]
fn test_single_forced_jump() {
    let mut board = Board::empty();
    board.set_piece(sq(5, 4), Some(Piece::man(Color::White)));
    board.set_piece(sq(6, 5), Some(Piece::man(Color::Black)));
    board.set_side_to_move(Color::Black);

    let moves = board.legal_moves(Color::Black);
    assert_eq!(moves.len(), 1);
    let mv = &moves[0];
    assert_eq!(mv.from, sq(6, 5));
    assert_eq!(mv.to, sq(4, 3));
    assert_eq!(mv.captures, vec![sq(5, 4)]);

    board.apply(mv);
    assert_eq!(board.count_pieces(), (0, 1));
    assert!(!board.piece_at(sq(4, 3)).expect("black man").is_king());
}

#[test]
fn test_king_double_jump_beats_single_captures() {
    // The king on (2,3) can take both men on its long diagonal; the man on
    // (0,5) has only a single capture available
    let board = Board::from_diagram(
        ".....w....
         ......b...
         ...W......
         ....b.....
         ..........
         ......b...
         ..........
         ..........
         ..........
         ..........",
    );

    let moves = board.legal_moves(Color::White);
    // Only the double jumps survive the maximum-capture filter: the king
    // takes both men and may stop on any of the three squares past the second
    assert_eq!(moves.len(), 3);
    for mv in &moves {
        assert_eq!(mv.from, sq(2, 3));
        assert_eq!(mv.captures.len(), 2);
        assert!(mv.captures.contains(&sq(3, 4)));
        assert!(mv.captures.contains(&sq(5, 6)));
    }
    let landings: Vec<Square> = moves.iter().map(|m| m.to).collect();
    for landing in [sq(6, 7), sq(7, 8), sq(8, 9)] {
        assert!(landings.contains(&landing));
    }
}

// =============================================================================
// Terminal and winner
// =============================================================================

#[test]
fn test_terminal_iff_no_moves() {
    let mut board = Board::empty();
    board.set_piece(sq(0, 1), Some(Piece::man(Color::Black)));
    board.set_piece(sq(5, 4), Some(Piece::man(Color::White)));
    board.set_side_to_move(Color::Black);

    // A black man on its own promotion row has nowhere to go
    assert!(board.legal_moves(Color::Black).is_empty());
    assert!(board.is_terminal());
    assert_eq!(board.winner(), GameStatus::Won(Color::White));

    board.set_side_to_move(Color::White);
    assert!(!board.is_terminal());
    assert_eq!(board.winner(), GameStatus::InProgress);
}

// =============================================================================
// Draw rules
// =============================================================================

/// The four-ply king shuffle used by the draw tests.
fn shuffle_cycle() -> [Move; 4] {
    [
        Move::new(sq(0, 1), sq(1, 0)),
        Move::new(sq(9, 8), sq(8, 9)),
        Move::new(sq(1, 0), sq(0, 1)),
        Move::new(sq(8, 9), sq(9, 8)),
    ]
}

fn kings_only_board() -> Board {
    let mut board = Board::empty();
    board.set_piece(sq(0, 1), Some(Piece::king(Color::White)));
    board.set_piece(sq(9, 8), Some(Piece::king(Color::Black)));
    board
}

#[test]
fn test_draw_by_threefold_repetition() {
    let mut board = kings_only_board();
    let cycle = shuffle_cycle();

    for ply in 0..12 {
        let mover = board.side_to_move();
        board.apply(&cycle[ply % 4]);
        if ply == 7 {
            // The position has only occurred twice at this point
            assert!(!board.is_draw());
        }
        if ply < 11 {
            board.set_side_to_move(mover.other());
        }
    }

    // The same four-ply cycle played three times: the position after the
    // twelfth ply has now been seen three times
    assert!(board.is_draw());
    assert_eq!(board.winner(), GameStatus::Draw);
}

#[test]
fn test_draw_by_twenty_five_quiet_moves() {
    let mut board = kings_only_board();
    let cycle = shuffle_cycle();

    for ply in 0..25 {
        let mover = board.side_to_move();
        board.apply(&cycle[ply % 4]);
        board.set_side_to_move(mover.other());
    }

    assert_eq!(board.quiet_moves(), 25);
    assert!(board.is_draw());
}

// =============================================================================
// Diagrams
// =============================================================================

#[test]
fn test_diagram_round_trips_through_display() {
    let board = Board::new();
    let rendered = board.to_string();
    let reparsed = Board::from_diagram(&rendered);
    assert_eq!(reparsed, board);

    let mut endgame = Board::empty();
    endgame.set_piece(sq(0, 1), Some(Piece::king(Color::White)));
    endgame.set_piece(sq(9, 8), Some(Piece::man(Color::Black)));
    assert_eq!(Board::from_diagram(&endgame.to_string()), endgame);
}

// =============================================================================
// Hashing
// =============================================================================

#[test]
fn test_hash_is_pure_function_of_state() {
    let board1 = Board::new();
    let board2 = Board::new();
    assert_eq!(board1.hash(), board2.hash());

    let mut board3 = Board::new();
    board3.set_side_to_move(Color::Black);
    assert_ne!(board1.hash(), board3.hash());

    let mut board4 = Board::new();
    board4.set_piece(sq(3, 4), None);
    assert_ne!(board1.hash(), board4.hash());
}

#[test]
fn test_hash_invariant_under_make_undo() {
    let mut board = Board::new();
    let hash = board.hash();
    for mv in board.legal_moves(Color::White) {
        let undo = board.make(&mv);
        assert_ne!(board.hash(), hash);
        board.undo(undo);
        assert_eq!(board.hash(), hash);
    }
}
