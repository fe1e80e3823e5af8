use blast_core::LineClear;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("{count} pieces given, at most {max} are supported")]
    TooManyPieces { count: usize, max: usize },
}

/// A recorded move sequence that does not reproduce on its board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("move {step} does not fit at ({x}, {y})")]
    Blocked { step: usize, x: i8, y: i8 },
    #[error("move {step} recorded {recorded:?} but replay cleared {replayed:?}")]
    ClearMismatch {
        step: usize,
        recorded: LineClear,
        replayed: LineClear,
    },
}
