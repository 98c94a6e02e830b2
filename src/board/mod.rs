//! King of the Hill board representation and game logic.
//!
//! Standard chess piece movement with two ways to win: capture the enemy
//! king, or walk your own king onto one of the four central squares.
//! There is no check or checkmate, no castling, no en passant, and no
//! promotion; kings are captured like any other piece.
//!
//! # Example
//! ```
//! use hill_chess::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! assert!(game.try_move("e2", "e4"));
//! assert!(!game.try_move("e2", "e4")); // square is empty now
//! assert_eq!(game.status(), GameStatus::Unfinished);
//! ```

mod builder;
mod error;
mod game;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::SquareError;
pub use game::Game;
pub use state::Board;
pub use types::{Color, GameStatus, Piece, Square};

pub(crate) use game::HILL_SQUARES;
