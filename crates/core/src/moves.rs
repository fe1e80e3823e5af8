//! Move and line-clear records.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{Board, Piece};

/// Row or column indices; at most eight of either per clear.
pub type LineIndices = SmallVec<[u8; Board::SIZE]>;

/// Lines emptied by one `clear_lines` pass
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct LineClear {
    pub rows: LineIndices,
    pub cols: LineIndices,
}

impl LineClear {
    /// Rows plus columns. A cell where a cleared row meets a cleared column
    /// still counts toward both.
    pub fn count(&self) -> u32 {
        (self.rows.len() + self.cols.len()) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }

    pub fn contains_row(&self, y: usize) -> bool {
        self.rows.iter().any(|&r| r as usize == y)
    }

    pub fn contains_col(&self, x: usize) -> bool {
        self.cols.iter().any(|&c| c as usize == x)
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Move {
    pub piece: Piece,
    pub x: i8,
    pub y: i8,
    pub lines_cleared: u8,
    pub cleared: LineClear,
}

impl Move {
    pub fn new(piece: Piece, x: i8, y: i8) -> Self {
        Self {
            piece,
            x,
            y,
            lines_cleared: 0,
            cleared: LineClear::default(),
        }
    }

    pub fn with_clear(mut self, cleared: LineClear) -> Self {
        self.lines_cleared = cleared.count() as u8;
        self.cleared = cleared;
        self
    }
}
