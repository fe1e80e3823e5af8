use thiserror::Error;

/// Errors from reading boards and pieces out of their text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unexpected character {ch:?} at row {row}, column {col}")]
    BadCell { row: usize, col: usize, ch: char },
    #[error("piece does not fit a {max}x{max} canvas")]
    PieceTooLarge { max: usize },
    #[error("piece has no filled cells")]
    EmptyPiece,
}
