// error.rs - Errors for the fallible edges of the grid model

use thiserror::Error;

/// Errors from building or addressing a grid with caller-supplied data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the {cols}x{rows} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        cols: usize,
        rows: usize,
    },
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} is {found} cells wide, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row}, column {col}: expected '#' or '.', found {found:?}")]
    InvalidCell { row: usize, col: usize, found: char },
}
