//! Mailbox board state.

use std::fmt;

use super::{Color, Piece, Square};

/// An 8x8 board holding the piece placement.
///
/// Row 0 is rank 8 (black's back rank) and row 7 is rank 1. Each square
/// is either empty or holds a `(Color, Piece)` descriptor.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Board {
    /// Back-rank piece order, files a through h.
    pub(crate) const BACK_RANK: [Piece; 8] = [
        Piece::Rook,
        Piece::Knight,
        Piece::Bishop,
        Piece::Queen,
        Piece::King,
        Piece::Bishop,
        Piece::Knight,
        Piece::Rook,
    ];

    /// The standard 32-piece starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, &piece) in Self::BACK_RANK.iter().enumerate() {
            board.set_piece(Square(0, file), Color::Black, piece);
            board.set_piece(Square(1, file), Color::Black, Piece::Pawn);
            board.set_piece(Square(6, file), Color::White, Piece::Pawn);
            board.set_piece(Square(7, file), Color::White, piece);
        }
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The color and kind of the piece on `sq`, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.row()][sq.col()]
    }

    /// Returns true if `sq` holds no piece.
    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.row()][sq.col()].is_none()
    }

    /// Returns true if `sq` holds a piece opposing `color`.
    #[inline]
    pub(crate) fn is_opponent_of(&self, sq: Square, color: Color) -> bool {
        matches!(self.piece_at(sq), Some((c, _)) if c == color.opponent())
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.row()][sq.col()] = Some((color, piece));
    }

    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.squares[sq.row()][sq.col()] = None;
    }

    /// The square holding `color`'s king, if it is still on the board.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, c, piece)| c == color && piece == Piece::King)
            .map(|(sq, _, _)| sq)
    }

    /// Iterate over every occupied square as `(square, color, piece)`,
    /// row by row from rank 8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|(color, piece)| (Square(row, col), color, piece))
            })
        })
    }

    /// Rendering character for `sq`: the piece letter (uppercase for
    /// white, lowercase for black), or `None` for an empty square.
    #[must_use]
    pub fn char_at(&self, sq: Square) -> Option<char> {
        self.piece_at(sq)
            .map(|(color, piece)| piece.to_fen_char(color))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} |", 8 - row)?;
            for col in 0..8 {
                let c = self.char_at(Square(row, col)).unwrap_or(' ');
                write!(f, " {c} |")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h")
    }
}
