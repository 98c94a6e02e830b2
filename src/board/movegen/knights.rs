use super::super::{Board, Color, Square};

/// The eight knight jump offsets.
const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (1, 2),
    (1, -2),
    (-2, 1),
    (-2, -1),
    (-1, 2),
    (-1, -2),
];

impl Board {
    /// Knight destinations: each in-bounds offset square that is empty or
    /// holds an opponent piece. Intervening pieces never block a knight.
    pub(crate) fn knight_destinations(&self, from: Square, color: Color) -> Vec<Square> {
        let mut moves = Vec::new();
        for &(dr, dc) in &KNIGHT_OFFSETS {
            if let Some(sq) = from.offset(dr, dc) {
                if self.is_empty(sq) || self.is_opponent_of(sq, color) {
                    moves.push(sq);
                }
            }
        }
        moves
    }
}
