//! Error types for square parsing and construction.

use std::fmt;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row index out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column index out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_error_row_bounds() {
        let err = SquareError::RowOutOfBounds { row: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_square_error_col_bounds() {
        let err = SquareError::ColOutOfBounds { col: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_error_clone() {
        let err = SquareError::InvalidNotation {
            notation: "e9".to_string(),
        };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
