//! Error types for the board engine

use thiserror::Error;

use crate::types::{Cell, MIN_BOARD_SIZE};

/// Errors returned when a board cannot be built.
///
/// No board value exists when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Side length below [`MIN_BOARD_SIZE`]
    #[error("board size must be at least {MIN_BOARD_SIZE}, got {size}")]
    InvalidSize { size: usize },

    /// A row whose length differs from the number of rows
    #[error("row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A cell that is neither empty nor a power of two >= 2
    #[error("cell ({row}, {col}) holds {value}, which is not a valid tile")]
    InvalidTile { row: usize, col: usize, value: Cell },
}

/// Result type alias for board construction
pub type BoardResult<T> = Result<T, BoardError>;
