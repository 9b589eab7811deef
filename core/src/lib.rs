//! Rules and analysis core for an 8x8 chess application.
//!
//! Every query takes an immutable [`Board`] snapshot and returns a plain
//! value; the crate holds no state between calls, so it is safe to use
//! from any number of threads on independent boards. The rule set is the
//! simplified one the surrounding application plays: castling, en
//! passant, and pawn promotion are not modeled, and draw detection
//! beyond stalemate is the caller's concern.

pub mod analysis;
pub mod board;
pub mod move_gen;
pub mod notation;
pub mod types;

pub use analysis::*;
pub use board::*;
pub use move_gen::*;
pub use notation::{positions, NotationError};
pub use types::*;
