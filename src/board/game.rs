//! Game orchestration: turn management, move validation, win conditions.

use super::{Board, Color, GameStatus, Piece, Square};

/// The four central squares (d4, e4, d5, e5). A king standing on any of
/// them after a move wins the game for its color.
pub(crate) const HILL_SQUARES: [Square; 4] =
    [Square(3, 3), Square(3, 4), Square(4, 3), Square(4, 4)];

/// Rejection trace. Diagnostics only; never part of the move contract.
macro_rules! trace_reject {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        {
            log::debug!($($arg)*);
        }
    }};
}

/// A King of the Hill game in progress.
///
/// Owns the board exclusively; the only mutating operation is
/// [`Game::try_move`]. Once the status leaves
/// [`GameStatus::Unfinished`] the game is effectively read-only.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    status: GameStatus,
}

impl Game {
    /// Start a game from the standard initial position, white to move.
    #[must_use]
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            side_to_move: Color::White,
            status: GameStatus::Unfinished,
        }
    }

    pub(crate) fn from_parts(board: Board, side_to_move: Color) -> Self {
        Game {
            board,
            side_to_move,
            status: GameStatus::Unfinished,
        }
    }

    /// The current board.
    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it is.
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The current game status.
    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Attempt the move `from` -> `to`, both in algebraic square notation
    /// ("e2"). Applies the move and returns true if it is legal; returns
    /// false and leaves the game untouched otherwise.
    ///
    /// A legal move requires: the game is unfinished, both squares parse,
    /// `from` holds a piece of the side to move, and `to` is among that
    /// piece's destinations. Captures are implicit: whatever occupies the
    /// destination is discarded. After the move the turn switches and the
    /// win conditions are evaluated.
    pub fn try_move(&mut self, from: &str, to: &str) -> bool {
        if self.status.is_finished() {
            trace_reject!("move rejected: game is over ({})", self.status);
            return false;
        }

        let (from_sq, to_sq) = match (from.parse::<Square>(), to.parse::<Square>()) {
            (Ok(f), Ok(t)) => (f, t),
            _ => {
                trace_reject!("move rejected: bad square notation '{from}' -> '{to}'");
                return false;
            }
        };

        let (color, piece) = match self.board.piece_at(from_sq) {
            Some((color, piece)) if color == self.side_to_move => (color, piece),
            _ => {
                trace_reject!(
                    "move rejected: {from_sq} does not hold a {} piece",
                    self.side_to_move
                );
                return false;
            }
        };

        if !self.board.destinations(from_sq).contains(&to_sq) {
            trace_reject!("move rejected: {to_sq} is not a destination of the {piece:?} on {from_sq}");
            return false;
        }

        // Capture win, read from the destination before the move lands.
        if self.board.piece_at(to_sq) == Some((color.opponent(), Piece::King)) {
            self.status = GameStatus::win_for(color);
        }

        self.board.set_piece(to_sq, color, piece);
        self.board.clear_square(from_sq);
        self.side_to_move = self.side_to_move.opponent();

        // Hill win: a king standing on a central square after the move.
        if HILL_SQUARES.contains(&to_sq) {
            if let Some((c, Piece::King)) = self.board.piece_at(to_sq) {
                self.status = GameStatus::win_for(c);
            }
        }

        true
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
