//! Plain data types shared across the board module.

mod piece;
mod square;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use piece::{Color, Piece};
pub use square::Square;

/// Terminal or non-terminal classification of a game.
///
/// Terminal statuses are absorbing: once a game is won, no further move
/// is accepted and the board never changes again.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Unfinished,
    WhiteWon,
    BlackWon,
}

impl GameStatus {
    /// Returns true once the game has a winner.
    #[inline]
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, GameStatus::Unfinished)
    }

    /// The winning color, if any.
    #[inline]
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Unfinished => None,
            GameStatus::WhiteWon => Some(Color::White),
            GameStatus::BlackWon => Some(Color::Black),
        }
    }

    /// The win state for `color`.
    #[inline]
    #[must_use]
    pub(crate) const fn win_for(color: Color) -> GameStatus {
        match color {
            Color::White => GameStatus::WhiteWon,
            Color::Black => GameStatus::BlackWon,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Unfinished => write!(f, "UNFINISHED"),
            GameStatus::WhiteWon => write!(f, "WHITE_WON"),
            GameStatus::BlackWon => write!(f, "BLACK_WON"),
        }
    }
}
