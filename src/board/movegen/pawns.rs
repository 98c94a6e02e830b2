use super::super::{Board, Color, Square};

impl Board {
    /// Pawn destinations: forward advances onto empty squares (two from
    /// the starting row, scanning stops at the first blocked or off-board
    /// square) plus diagonal captures onto opponent pieces. No en passant,
    /// and a pawn on the last rank stays a pawn with no moves forward.
    pub(crate) fn pawn_destinations(&self, from: Square, color: Color) -> Vec<Square> {
        let mut moves = Vec::new();
        let dir = color.pawn_direction();

        let max_distance: isize = if from.row() == color.pawn_start_row() {
            2
        } else {
            1
        };
        for step in 1..=max_distance {
            match from.offset(dir * step, 0) {
                Some(sq) if self.is_empty(sq) => moves.push(sq),
                _ => break,
            }
        }

        for dc in [-1, 1] {
            if let Some(sq) = from.offset(dir, dc) {
                if self.is_opponent_of(sq, color) {
                    moves.push(sq);
                }
            }
        }

        moves
    }
}
