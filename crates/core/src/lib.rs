//! Blast core crate - board, piece and move types for the 8x8 block puzzle.

mod board;
mod error;
mod moves;
mod piece;

pub use board::Board;
pub use error::ParseError;
pub use moves::{LineClear, LineIndices, Move};
pub use piece::{Canvas, Piece, MAX_PIECE_SIZE};

/// Parse one cell character. `#`, `x`, `X` and `1` are filled; `.` and `0` are empty.
pub(crate) fn parse_cell(ch: char) -> Option<bool> {
    match ch {
        '#' | 'x' | 'X' | '1' => Some(true),
        '.' | '0' => Some(false),
        _ => None,
    }
}
