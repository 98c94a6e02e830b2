//! Fluent builder for constructing positions.
//!
//! Allows setting up a game piece by piece rather than replaying move
//! sequences from the starting position.
//!
//! # Example
//! ```
//! use hill_chess::{BoardBuilder, Color, Piece, Square};
//!
//! let game = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(game.side_to_move(), Color::White);
//! ```

use super::{Board, Color, Game, Piece, Square};

/// A fluent builder for setting up `Game` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty builder, white to move.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for (file, &piece) in Board::BACK_RANK.iter().enumerate() {
            builder.pieces.push((Square(0, file), Color::Black, piece));
            builder
                .pieces
                .push((Square(1, file), Color::Black, Piece::Pawn));
            builder
                .pieces
                .push((Square(6, file), Color::White, Piece::Pawn));
            builder.pieces.push((Square(7, file), Color::White, piece));
        }
        builder
    }

    /// Place a piece, replacing any existing occupant of the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove any piece from a square.
    #[must_use]
    pub fn remove(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set which color moves first.
    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the game with status `Unfinished`.
    #[must_use]
    pub fn build(self) -> Game {
        let mut board = Board::empty();
        for (square, color, piece) in self.pieces {
            board.set_piece(square, color, piece);
        }
        Game::from_parts(board, self.side_to_move)
    }
}
