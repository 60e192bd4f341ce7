//! Error types for board construction and placement

/// Coarse classification of a [`BoardError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied parameters outside the supported range
    InvalidArgument,
    /// The operation is not allowed in the board's current state
    InvalidState,
}

/// Board-specific errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board side length outside `1..=max`
    #[error("length of sides of board must lie in the range 1..={max}, got {size}")]
    InvalidBoardSize { size: u32, max: u32 },

    /// Queen count outside `1..=size`
    #[error("number of queens must lie in the range 1..={size}, got {queens}")]
    InvalidQueenCount { queens: u32, size: u32 },

    /// Column index outside the board
    #[error("column {column} lies outside a board with sides of length {size}")]
    ColumnOutOfRange { column: u32, size: u32 },

    /// All queens are already placed
    #[error("cannot place more than {capacity} queens")]
    BoardFull { capacity: u32 },
}

impl BoardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::InvalidBoardSize { .. }
            | BoardError::InvalidQueenCount { .. }
            | BoardError::ColumnOutOfRange { .. } => ErrorKind::InvalidArgument,
            BoardError::BoardFull { .. } => ErrorKind::InvalidState,
        }
    }
}

/// Result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;
