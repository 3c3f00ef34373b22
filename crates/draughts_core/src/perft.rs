use crate::board::Board;

/// Pure perft node count.
/// Counts the leaf nodes of the legal-move tree down to `depth`.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves(board.side_to_move());
    let mut nodes = 0u64;
    for mv in &moves {
        let undo = board.make(mv);
        let mover = board.side_to_move();
        board.set_side_to_move(mover.other());
        nodes += perft(board, depth - 1);
        board.set_side_to_move(mover);
        board.undo(undo);
    }
    nodes
}
