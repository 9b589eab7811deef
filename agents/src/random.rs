use crate::{Agent, ENGINE_SIDE};
use chessmaster_core::{legal_moves, Board, Move};
use rand::seq::SliceRandom;
use rand::thread_rng;

/// The easy tier: a uniformly random choice among the legal moves.
pub struct RandomAgent {
    name: String,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            name: "Random".to_string(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn best_move(&mut self, board: &Board) -> Option<Move> {
        let moves = legal_moves(board, ENGINE_SIDE);
        moves.choose(&mut thread_rng()).copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chessmaster_core::positions;
    use std::collections::HashSet;

    #[test]
    fn test_every_legal_move_shows_up() {
        let board = Board::from_placement(positions::THREE_LEGAL_MOVES).unwrap();
        let legal: Vec<Move> = legal_moves(&board, ENGINE_SIDE);
        assert_eq!(legal.len(), 3);

        let mut agent = RandomAgent::new();
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let mv = agent.best_move(&board).unwrap();
            assert!(legal.contains(&mv));
            seen.insert(mv);
        }

        // Not a uniformity test, just a sanity check that nothing is
        // systematically excluded.
        assert_eq!(seen.len(), legal.len());
    }

    #[test]
    fn test_no_moves_means_no_choice() {
        let board = Board::from_placement(positions::BACK_RANK_MATE).unwrap();
        assert_eq!(RandomAgent::new().best_move(&board), None);
    }
}
