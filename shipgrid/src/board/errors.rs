//! Errors used by the [`Board`][crate::board::Board] and its [`Dimensions`].

use thiserror::Error;

/// Error returned when a coordinate or linear index does not address a cell of the
/// board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum OutOfBounds {
    /// The requested row is past the last row.
    #[error("board has only {rows} rows, row {row} was requested")]
    Row { row: usize, rows: usize },

    /// The requested column is past the last column.
    #[error("board has only {columns} columns, column {col} was requested")]
    Column { col: usize, columns: usize },

    /// The requested linear index is past the last cell.
    #[error("board has only {size} cells, index {index} was requested")]
    Index { index: usize, size: usize },
}

/// Error returned when constructing [`Dimensions`] that cannot hold a board.
///
/// [`Dimensions`]: crate::board::Dimensions
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum DimensionsError {
    /// One of the dimensions was zero.
    #[error("board dimensions must be nonzero, got {rows}x{columns}")]
    Empty { rows: usize, columns: usize },

    /// The number of cells does not fit in a `usize`.
    #[error("board dimensions too large: {rows}x{columns} cells do not fit in a usize")]
    TooLarge { rows: usize, columns: usize },
}
