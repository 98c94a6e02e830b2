pub mod board;

pub use board::{Board, BoardBuilder, Color, Game, GameStatus, Piece, Square, SquareError};
