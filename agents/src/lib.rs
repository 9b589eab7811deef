//! Move selection for the computer opponent, at three strength tiers.
//!
//! All agents play the same fixed side ([`ENGINE_SIDE`]) and pick from
//! the same filtered move list: every geometrically legal move that does
//! not leave that side's own king in check. An empty list means the game
//! is over for the engine side; the caller tells checkmate from
//! stalemate with the analysis queries in `chessmaster_core`.

pub mod capture;
pub mod evaluation;
pub mod heuristic;
pub mod random;

use chessmaster_core::{Board, Color, Move};

/// The side every agent plays: the engine always moves second.
pub const ENGINE_SIDE: Color = Color::Black;

/// Core trait for move-selecting agents.
pub trait Agent {
    /// Picks a move for the engine side, or None when no legal move
    /// exists.
    fn best_move(&mut self, board: &Board) -> Option<Move>;

    /// Gets the agent's name.
    fn name(&self) -> &str;
}

/// Opponent strength tiers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Picks a move for the engine side at the requested strength.
///
/// Returning None is not an error: it signals that the engine side has
/// no legal move at all.
pub fn generate_move(board: &Board, difficulty: Difficulty) -> Option<Move> {
    match difficulty {
        Difficulty::Easy => RandomAgent::new().best_move(board),
        Difficulty::Medium => CaptureAgent::new().best_move(board),
        Difficulty::Hard => HeuristicAgent::new().best_move(board),
    }
}

pub use capture::CaptureAgent;
pub use evaluation::{GreedyEvaluator, MoveEvaluator};
pub use heuristic::HeuristicAgent;
pub use random::RandomAgent;
