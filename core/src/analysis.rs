//! Check detection and terminal-state analysis, built on top of the
//! movement geometry: a king is in check when any enemy piece could
//! geometrically reach its square, and checkmate/stalemate fall out of
//! playing every candidate move on a copy and looking again.

use crate::board::Board;
use crate::move_gen::{is_legal_geometry, legal_destinations};
use crate::types::{Color, Move};

/// Returns true if the given side's king is attacked.
///
/// A board without a king of that color answers false: the question is
/// taken as answerable for any reachable board rather than panicking on
/// a missing piece.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let king_square = match board.king_square(color) {
        Some(square) => square,
        None => return false,
    };

    // Attack detection is geometry reuse: any enemy piece that could
    // legally move onto the king's square is giving check. Pawns attack
    // only their two capture diagonals, which this covers exactly.
    board
        .pieces(color.opponent())
        .any(|piece| is_legal_geometry(board, piece.square, king_square, piece))
}

/// Every move for `color` that is geometrically legal and does not leave
/// that side's own king in check. Each candidate is played on a fresh
/// copy of the board and kept only if the copy shows no check.
///
/// Enumeration order is row-major over pieces, then row-major over each
/// piece's destinations.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();

    for piece in board.pieces(color) {
        for to in legal_destinations(board, piece, piece.square) {
            let mv = Move::new(piece.square, to);
            if !is_in_check(&board.apply_move(mv), color) {
                moves.push(mv);
            }
        }
    }

    moves
}

/// Returns true if the given side is in check and has no move that gets
/// it out.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    is_in_check(board, color) && legal_moves(board, color).is_empty()
}

/// Returns true if the given side is not in check but has no move that
/// would not put it in check.
pub fn is_stalemate(board: &Board, color: Color) -> bool {
    !is_in_check(board, color) && legal_moves(board, color).is_empty()
}
