//! Per-piece legal-destination generation.
//!
//! Each rule is a pure read of the board: given an occupied square it
//! returns every square that piece may move to. There is no check in
//! this variant, so no king-safety filtering happens anywhere.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Piece, Square};

/// Orthogonal ray directions as (row, col) deltas.
pub(crate) const ROOK_DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal ray directions.
pub(crate) const BISHOP_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    /// Every legal destination for the piece on `from`, or an empty list
    /// if the square is empty.
    ///
    /// Deterministic and side-effect-free; an empty result is a valid
    /// answer (a fully blocked piece simply has nowhere to go).
    #[must_use]
    pub fn destinations(&self, from: Square) -> Vec<Square> {
        let Some((color, piece)) = self.piece_at(from) else {
            return Vec::new();
        };

        match piece {
            Piece::Pawn => self.pawn_destinations(from, color),
            Piece::Knight => self.knight_destinations(from, color),
            Piece::Bishop => self.sliding_destinations(from, color, &BISHOP_DIRS),
            Piece::Rook => self.sliding_destinations(from, color, &ROOK_DIRS),
            Piece::Queen => {
                // Queen = rook rays + bishop rays from the same square.
                let mut moves = self.sliding_destinations(from, color, &ROOK_DIRS);
                moves.extend(self.sliding_destinations(from, color, &BISHOP_DIRS));
                moves
            }
            Piece::King => self.king_destinations(from, color),
        }
    }
}
