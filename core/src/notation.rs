//! Parsing and serialization of board-placement strings: the piece-placement
//! field of FEN, e.g. "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR".
//!
//! The leading rank of a placement is the eighth rank, which is row 0 here,
//! so ranks map to rows in order. Only the placement field exists: whose
//! turn it is, along with any castling or clock bookkeeping, belongs to the
//! session layer that owns the board between engine calls.

use crate::board::Board;
use crate::types::{Col, Color, Piece, PieceType, Row, Square};
use std::fmt;

/// Placement parsing error types.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum NotationError {
    InvalidPiece(char),
    WrongRankCount(usize),
    WrongRankWidth { rank: usize, width: u8 },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::InvalidPiece(c) => write!(f, "Invalid piece character: '{c}'"),
            NotationError::WrongRankCount(n) => write!(f, "Expected 8 ranks, got {n}"),
            NotationError::WrongRankWidth { rank, width } => {
                write!(f, "Rank {} covers {width} squares, expected 8", 8 - rank)
            }
        }
    }
}

impl std::error::Error for NotationError {}

impl Board {
    /// Parses a placement string into a board.
    ///
    /// Pieces parsed onto their home row (the pawn start row for pawns,
    /// the back row otherwise) come out with the moved flag clear;
    /// everything else is marked as having moved.
    pub fn from_placement(placement: &str) -> Result<Self, NotationError> {
        let ranks: Vec<&str> = placement.split('/').collect();

        if ranks.len() != 8 {
            return Err(NotationError::WrongRankCount(ranks.len()));
        }

        let mut board = Board::empty();

        for (row_index, rank) in ranks.iter().enumerate() {
            let row = Row::new(row_index as u8).unwrap();
            let mut col_index: u8 = 0;

            for ch in rank.chars() {
                if let Some(run) = ch.to_digit(10) {
                    // A digit stands for that many empty squares.
                    col_index = col_index.saturating_add(run as u8);
                    continue;
                }

                let (piece_type, color) = piece_from_char(ch)?;
                let col = match Col::new(col_index) {
                    Some(col) => col,
                    None => {
                        return Err(NotationError::WrongRankWidth {
                            rank: row_index,
                            width: col_index.saturating_add(1),
                        });
                    }
                };

                let square = Square::new(row, col);
                let home = match piece_type {
                    PieceType::Pawn => color.pawn_start_row(),
                    _ => color.home_row(),
                };
                let mut piece = Piece::new(piece_type, color, square);
                piece.has_moved = row != home;
                board.set_piece(square, Some(piece));

                col_index += 1;
            }

            if col_index != 8 {
                return Err(NotationError::WrongRankWidth {
                    rank: row_index,
                    width: col_index,
                });
            }
        }

        Ok(board)
    }

    /// Converts the board to a placement string.
    pub fn placement_string(&self) -> String {
        let mut placement = String::new();

        for row_index in 0..8 {
            let row = Row::new(row_index).unwrap();
            let mut empty_count = 0;

            for col_index in 0..8 {
                let col = Col::new(col_index).unwrap();

                match self.piece_at(Square::new(row, col)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            placement.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        placement.push(piece_to_char(piece));
                    }
                    None => {
                        empty_count += 1;
                    }
                }
            }

            if empty_count > 0 {
                placement.push_str(&empty_count.to_string());
            }

            if row_index < 7 {
                placement.push('/');
            }
        }

        placement
    }
}

/// Parses a placement character into a piece type and color.
fn piece_from_char(ch: char) -> Result<(PieceType, Color), NotationError> {
    let color = if ch.is_uppercase() {
        Color::White
    } else {
        Color::Black
    };

    let piece_type = match ch.to_ascii_lowercase() {
        'p' => PieceType::Pawn,
        'n' => PieceType::Knight,
        'b' => PieceType::Bishop,
        'r' => PieceType::Rook,
        'q' => PieceType::Queen,
        'k' => PieceType::King,
        _ => return Err(NotationError::InvalidPiece(ch)),
    };

    Ok((piece_type, color))
}

/// Converts a piece to its placement character.
fn piece_to_char(piece: Piece) -> char {
    let ch = match piece.piece_type {
        PieceType::Pawn => 'p',
        PieceType::Knight => 'n',
        PieceType::Bishop => 'b',
        PieceType::Rook => 'r',
        PieceType::Queen => 'q',
        PieceType::King => 'k',
    };

    if piece.color == Color::White {
        ch.to_ascii_uppercase()
    } else {
        ch
    }
}

/// Named placements for tests.
pub mod positions {
    /// The standard starting position.
    pub const STARTING: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Black's king is mated on d8: the queen on d1 checks along the open
    /// d-file and the rooks on a8 and a7 cover every escape square.
    pub const BACK_RANK_MATE: &str = "R2k4/R7/8/8/8/8/8/3Q3K";

    /// Black's lone king on a8 has no safe square but is not attacked.
    pub const CORNER_STALEMATE: &str = "k7/2Q5/8/8/8/8/8/7K";

    /// Black's only moves are the b2 pawn's quiet push and its capture of
    /// the queen on c1; the king on h8 is boxed in by the queen on g6.
    pub const FORCED_QUEEN_CAPTURE: &str = "7k/8/6Q1/8/8/8/1p6/2Q1K3";

    /// As [`FORCED_QUEEN_CAPTURE`] with a rook added on a1: exactly three
    /// legal moves for Black.
    pub const THREE_LEGAL_MOVES: &str = "7k/8/6Q1/8/8/8/1p6/R1Q1K3";
}
