use crate::evaluation::{GreedyEvaluator, MoveEvaluator};
use crate::{Agent, ENGINE_SIDE};
use chessmaster_core::{legal_moves, Board, Move};

/// The hard tier: scores every legal move with a single-ply evaluator
/// and plays the strictly highest-scoring one. Ties go to the move found
/// first; there is no lookahead into the reply.
pub struct HeuristicAgent<E = GreedyEvaluator> {
    name: String,
    evaluator: E,
}

impl HeuristicAgent {
    pub fn new() -> Self {
        Self::with_evaluator(GreedyEvaluator)
    }
}

impl Default for HeuristicAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: MoveEvaluator> HeuristicAgent<E> {
    /// Uses a custom evaluator in place of the default scoring.
    pub fn with_evaluator(evaluator: E) -> Self {
        HeuristicAgent {
            name: "Heuristic".to_string(),
            evaluator,
        }
    }
}

impl<E: MoveEvaluator> Agent for HeuristicAgent<E> {
    fn best_move(&mut self, board: &Board) -> Option<Move> {
        let moves = legal_moves(board, ENGINE_SIDE);

        let mut best: Option<(Move, i32)> = None;
        for &mv in &moves {
            let score = self.evaluator.score(board, mv);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((mv, score)),
            }
        }

        best.map(|(mv, _)| mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
