use crate::{Agent, ENGINE_SIDE};
use chessmaster_core::{legal_moves, Board, Move};
use rand::seq::SliceRandom;
use rand::thread_rng;

/// The medium tier: grabs the most valuable capture on offer, and plays
/// like the easy tier when there is nothing to take. Ties go to the move
/// found first.
pub struct CaptureAgent {
    name: String,
}

impl CaptureAgent {
    pub fn new() -> Self {
        CaptureAgent {
            name: "Greedy capture".to_string(),
        }
    }
}

impl Default for CaptureAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for CaptureAgent {
    fn best_move(&mut self, board: &Board) -> Option<Move> {
        let moves = legal_moves(board, ENGINE_SIDE);

        let mut best: Option<(Move, i32)> = None;
        for &mv in &moves {
            if let Some(target) = board.piece_at(mv.to) {
                let value = target.piece_type.value();
                match best {
                    Some((_, best_value)) if value <= best_value => {}
                    _ => best = Some((mv, value)),
                }
            }
        }

        match best {
            Some((mv, _)) => Some(mv),
            // Nothing to capture: fall back to a random choice from the
            // same list.
            None => moves.choose(&mut thread_rng()).copied(),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
