use super::super::{Board, Color, Square};

impl Board {
    /// Walk each ray in `dirs` outward from `from`, collecting empty
    /// squares and stopping at the first occupied one, which is included
    /// iff it holds an opponent piece.
    pub(crate) fn sliding_destinations(
        &self,
        from: Square,
        color: Color,
        dirs: &[(isize, isize)],
    ) -> Vec<Square> {
        let mut moves = Vec::new();
        for &(dr, dc) in dirs {
            let mut step = 1;
            while let Some(sq) = from.offset(dr * step, dc * step) {
                if self.is_empty(sq) {
                    moves.push(sq);
                } else {
                    if self.is_opponent_of(sq, color) {
                        moves.push(sq);
                    }
                    break;
                }
                step += 1;
            }
        }
        moves
    }
}
