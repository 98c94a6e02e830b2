use super::super::{Board, Color, Square};

/// The eight adjacent offsets.
const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (0, 1),
    (0, -1),
];

impl Board {
    /// King destinations: one step in any direction onto an empty or
    /// opponent-held square. The king may step onto attacked squares;
    /// this variant has no concept of check.
    pub(crate) fn king_destinations(&self, from: Square, color: Color) -> Vec<Square> {
        let mut moves = Vec::new();
        for &(dr, dc) in &KING_OFFSETS {
            if let Some(sq) = from.offset(dr, dc) {
                if self.is_empty(sq) || self.is_opponent_of(sq, color) {
                    moves.push(sq);
                }
            }
        }
        moves
    }
}
