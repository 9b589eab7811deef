//! Pure movement geometry: per-piece movement patterns and path
//! obstruction. Nothing here knows about check; whether a move endangers
//! the mover's own king is layered on separately so selection UIs can ask
//! for raw reachability first.

use crate::board::Board;
use crate::types::{Piece, PieceType, Square};

/// Returns true if moving `piece` from `from` to `to` is legal under the
/// piece-movement rules alone. Leaving one's own king in check is not
/// considered here.
///
/// `piece` is expected to stand on `from`; that precondition is the
/// caller's to uphold and is not verified.
pub fn is_legal_geometry(board: &Board, from: Square, to: Square, piece: Piece) -> bool {
    // A piece can never land on one of its own. This also rules out
    // staying in place, since the mover itself occupies `from`.
    if board.is_color(to, piece.color) {
        return false;
    }

    let row_delta = to.row().index() as i8 - from.row().index() as i8;
    let col_delta = to.col().index() as i8 - from.col().index() as i8;

    match piece.piece_type {
        PieceType::Pawn => pawn_move_legal(board, from, to, piece, row_delta, col_delta),
        PieceType::Knight => {
            (row_delta.abs() == 2 && col_delta.abs() == 1)
                || (row_delta.abs() == 1 && col_delta.abs() == 2)
        }
        PieceType::Rook => (row_delta == 0 || col_delta == 0) && path_clear(board, from, to),
        PieceType::Bishop => row_delta.abs() == col_delta.abs() && path_clear(board, from, to),
        PieceType::Queen => {
            let straight = row_delta == 0 || col_delta == 0;
            let diagonal = row_delta.abs() == col_delta.abs();
            (straight || diagonal) && path_clear(board, from, to)
        }
        PieceType::King => row_delta.abs() <= 1 && col_delta.abs() <= 1,
    }
}

/// Pawn movement: a single push onto an empty square, a double push from
/// the start row, or a one-square diagonal capture.
fn pawn_move_legal(
    board: &Board,
    from: Square,
    to: Square,
    piece: Piece,
    row_delta: i8,
    col_delta: i8,
) -> bool {
    let direction = piece.color.pawn_direction();

    // Straight pushes never capture.
    if col_delta == 0 {
        if board.piece_at(to).is_some() {
            return false;
        }
        if row_delta == direction {
            return true;
        }
        // Double push from the start row. Only the destination is
        // examined, so a blocker on the square stepped over does not
        // stop it.
        return from.row() == piece.color.pawn_start_row() && row_delta == 2 * direction;
    }

    // Diagonal moves must capture.
    if col_delta.abs() == 1 && row_delta == direction {
        return board.is_enemy(to, piece.color);
    }

    false
}

/// Walks from `from` toward `to` one square at a time along the unit
/// direction and fails on the first occupied square strictly between the
/// two. The destination itself is never examined.
fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let row_step = (to.row().index() as i8 - from.row().index() as i8).signum();
    let col_step = (to.col().index() as i8 - from.col().index() as i8).signum();

    let mut current = from;
    loop {
        current = match current.offset(row_step, col_step) {
            Some(square) => square,
            // A straight walk between two on-board squares stays on the
            // board; reachable only for degenerate inputs.
            None => return true,
        };
        if current == to {
            return true;
        }
        if !board.is_empty(current) {
            return false;
        }
    }
}

/// All squares `piece` can reach from `from` under the movement rules
/// alone, in row-major order. Callers that care whether a move exposes
/// their own king apply that filter on top (see
/// [`crate::analysis::legal_moves`]).
pub fn legal_destinations(board: &Board, piece: Piece, from: Square) -> Vec<Square> {
    Square::all()
        .filter(|&to| is_legal_geometry(board, from, to, piece))
        .collect()
}
