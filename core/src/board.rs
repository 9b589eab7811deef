use crate::types::*;

/// Piece order on each back row, from column 0 to column 7.
const BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// An 8x8 board: one optional piece per square.
///
/// The board is a plain value. Engine queries never mutate the board they
/// are given; hypothetical moves are played on a copy via [`Board::apply_move`]
/// and the copy is discarded or kept by the caller.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    /// 64 squares, indexed by Square::index()
    squares: [Option<Piece>; 64],
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// Creates the standard starting position: Black's pieces on rows 0
    /// and 1, White's on rows 6 and 7.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();

        for color in [Color::White, Color::Black] {
            for (index, &piece_type) in BACK_ROW.iter().enumerate() {
                let col = Col::new(index as u8).unwrap();

                let back = Square::new(color.home_row(), col);
                board.set_piece(back, Some(Piece::new(piece_type, color, back)));

                let pawn = Square::new(color.pawn_start_row(), col);
                board.set_piece(pawn, Some(Piece::new(PieceType::Pawn, color, pawn)));
            }
        }

        board
    }

    /// Gets the piece at the given square.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index() as usize]
    }

    /// Puts a piece on a square, or clears it. The stored piece's square
    /// field is restamped so it always agrees with its slot.
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.index() as usize] = piece.map(|p| Piece { square, ..p });
    }

    /// Returns true if the given square is empty.
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Returns true if the given square contains a piece of the given color.
    pub fn is_color(&self, square: Square, color: Color) -> bool {
        self.piece_at(square).map_or(false, |p| p.color == color)
    }

    /// Returns true if the given square contains an enemy piece.
    pub fn is_enemy(&self, square: Square, color: Color) -> bool {
        self.piece_at(square)
            .map_or(false, |p| p.color == color.opponent())
    }

    /// Finds the first king of the given color, scanning rows top to
    /// bottom and columns left to right. Returns None when the board
    /// holds no such king; callers treat that as an answerable state,
    /// not an error.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&square| {
            matches!(
                self.piece_at(square),
                Some(p) if p.piece_type == PieceType::King && p.color == color
            )
        })
    }

    /// All pieces of the given color, in row-major board order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.squares
            .iter()
            .flatten()
            .filter(move |piece| piece.color == color)
            .copied()
    }

    /// Returns a fresh board with the move applied: the source square is
    /// cleared and the destination overwritten, so any piece standing
    /// there simply disappears. The mover comes out with its square
    /// restamped and its moved flag set. The original board is untouched.
    /// Applying a move whose source square is empty returns an unchanged
    /// copy.
    pub fn apply_move(&self, mv: Move) -> Self {
        let mut next = self.clone();
        if let Some(piece) = next.piece_at(mv.from) {
            next.set_piece(mv.from, None);
            next.set_piece(
                mv.to,
                Some(Piece {
                    has_moved: true,
                    ..piece
                }),
            );
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn test_starting_position() {
        let board = Board::starting_position();

        let a8 = board.piece_at(sq("a8")).unwrap();
        assert_eq!(a8.piece_type, PieceType::Rook);
        assert_eq!(a8.color, Color::Black);

        let d8 = board.piece_at(sq("d8")).unwrap();
        assert_eq!(d8.piece_type, PieceType::Queen);
        assert_eq!(d8.color, Color::Black);

        let e1 = board.piece_at(sq("e1")).unwrap();
        assert_eq!(e1.piece_type, PieceType::King);
        assert_eq!(e1.color, Color::White);

        let b2 = board.piece_at(sq("b2")).unwrap();
        assert_eq!(b2.piece_type, PieceType::Pawn);
        assert_eq!(b2.color, Color::White);

        assert!(board.is_empty(sq("e4")));
        assert_eq!(board.pieces(Color::White).count(), 16);
        assert_eq!(board.pieces(Color::Black).count(), 16);
    }

    #[test]
    fn test_set_piece_restamps_square() {
        let mut board = Board::empty();
        let piece = Piece::new(PieceType::Knight, Color::White, sq("b1"));

        // Stored under a different square than the piece claims.
        board.set_piece(sq("c3"), Some(piece));

        assert_eq!(board.piece_at(sq("c3")).unwrap().square, sq("c3"));
    }

    #[test]
    fn test_apply_move_leaves_original_untouched() {
        let board = Board::starting_position();
        let next = board.apply_move(Move::new(sq("e2"), sq("e4")));

        assert_eq!(board, Board::starting_position());

        let pawn = next.piece_at(sq("e4")).unwrap();
        assert_eq!(pawn.piece_type, PieceType::Pawn);
        assert_eq!(pawn.square, sq("e4"));
        assert!(pawn.has_moved);
        assert!(next.is_empty(sq("e2")));
    }

    #[test]
    fn test_apply_move_captures_by_overwrite() {
        let mut board = Board::empty();
        board.set_piece(
            sq("a1"),
            Some(Piece::new(PieceType::Rook, Color::White, sq("a1"))),
        );
        board.set_piece(
            sq("a8"),
            Some(Piece::new(PieceType::Rook, Color::Black, sq("a8"))),
        );

        let next = board.apply_move(Move::new(sq("a1"), sq("a8")));

        let rook = next.piece_at(sq("a8")).unwrap();
        assert_eq!(rook.color, Color::White);
        assert_eq!(next.pieces(Color::Black).count(), 0);
        assert_eq!(next.pieces(Color::White).count(), 1);
    }

    #[test]
    fn test_apply_move_from_empty_square_is_a_no_op() {
        let board = Board::starting_position();
        let next = board.apply_move(Move::new(sq("e4"), sq("e5")));
        assert_eq!(next, board);
    }

    #[test]
    fn test_king_square() {
        let board = Board::starting_position();
        assert_eq!(board.king_square(Color::White), Some(sq("e1")));
        assert_eq!(board.king_square(Color::Black), Some(sq("e8")));

        assert_eq!(Board::empty().king_square(Color::White), None);
    }
}
