use chessmaster_core::{Board, Move, PieceType};

/// Scoring strategy for the hard tier. Implementations see the board a
/// move was generated against, before the move is applied.
///
/// This is the seam for a stronger opponent: a deeper search can slot in
/// as another evaluator without touching move generation or the legality
/// filter.
pub trait MoveEvaluator {
    /// Scores a candidate move; higher is better. Units are tenths of a
    /// pawn.
    fn score(&self, board: &Board, mv: Move) -> i32;
}

/// Single-ply scoring from three ingredients: material taken on the
/// destination square, proximity to the board centre, and a small bonus
/// for developing a minor piece off its back row. No lookahead.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyEvaluator;

impl MoveEvaluator for GreedyEvaluator {
    fn score(&self, board: &Board, mv: Move) -> i32 {
        let mut score = 0;

        // Captured material dominates the positional terms.
        if let Some(target) = board.piece_at(mv.to) {
            score += 10 * target.piece_type.value();
        }

        // One point per step closer to the centre.
        score += i32::from(7 - mv.to.center_distance());

        // Developing a knight or bishop off its back row.
        if let Some(piece) = board.piece_at(mv.from) {
            let minor = matches!(piece.piece_type, PieceType::Knight | PieceType::Bishop);
            if minor && mv.from.row() == piece.color.home_row() {
                score += 2;
            }
        }

        score
    }
}
