//! board representation - row-major u64 bitboard, bit `y * 8 + x`
//! y = 0 is the top row, x = 0 the leftmost column

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{parse_cell, LineClear, ParseError};

const ROW_MASK: u64 = 0xFF;
const COLUMN_MASK: u64 = 0x0101_0101_0101_0101;

/// 8x8 occupancy grid. `Copy`, so every search branch works on its own snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub struct Board {
    bits: u64,
}

impl Board {
    pub const SIZE: usize = 8;
    pub const EMPTY: Self = Self { bits: 0 };

    pub const fn new() -> Self {
        Self::EMPTY
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    #[inline(always)]
    pub const fn bits(&self) -> u64 {
        self.bits
    }

    #[inline(always)]
    fn bit(x: usize, y: usize) -> u64 {
        debug_assert!(x < Self::SIZE && y < Self::SIZE, "cell ({x}, {y}) off board");
        1u64 << (y * Self::SIZE + x)
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.bits & Self::bit(x, y) != 0
    }

    pub fn set(&mut self, x: usize, y: usize, filled: bool) {
        if filled {
            self.bits |= Self::bit(x, y);
        } else {
            self.bits &= !Self::bit(x, y);
        }
    }

    pub fn toggle(&mut self, x: usize, y: usize) {
        self.bits ^= Self::bit(x, y);
    }

    /// Raw row data, bit x = column x
    pub fn row(&self, y: usize) -> u8 {
        ((self.bits >> (y * Self::SIZE)) & ROW_MASK) as u8
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        let row = ROW_MASK << (y * Self::SIZE);
        self.bits & row == row
    }

    pub fn is_column_full(&self, x: usize) -> bool {
        let col = COLUMN_MASK << x;
        self.bits & col == col
    }

    /// Number of filled cells - the tie-break measure for equal scores
    #[inline]
    pub fn filled_cells(&self) -> u32 {
        self.bits.count_ones()
    }

    pub fn is_clear(&self) -> bool {
        self.bits == 0
    }

    /// Does any cell of `mask` already hold a block?
    #[inline(always)]
    pub fn overlaps(&self, mask: u64) -> bool {
        self.bits & mask != 0
    }

    /// Fill every cell in `mask`. The cells must be empty; callers verify first.
    #[inline]
    pub fn fill(&mut self, mask: u64) {
        debug_assert!(!self.overlaps(mask), "fill over occupied cells");
        self.bits |= mask;
    }

    /// Empty every full row and full column, judged from one snapshot.
    /// A cell on both a full row and a full column is emptied once but the
    /// row and the column are both reported. No cascading re-check.
    pub fn clear_lines(&mut self) -> LineClear {
        let snapshot = self.bits;
        let mut cleared = LineClear::default();
        let mut mask = 0u64;

        for y in 0..Self::SIZE {
            let row = ROW_MASK << (y * Self::SIZE);
            if snapshot & row == row {
                cleared.rows.push(y as u8);
                mask |= row;
            }
        }

        for x in 0..Self::SIZE {
            let col = COLUMN_MASK << x;
            if snapshot & col == col {
                cleared.cols.push(x as u8);
                mask |= col;
            }
        }

        self.bits &= !mask;
        cleared
    }

    /// Build from eight text rows of `#` / `.`
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, ParseError> {
        if rows.len() != Self::SIZE {
            return Err(ParseError::RowCount {
                expected: Self::SIZE,
                found: rows.len(),
            });
        }
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref().trim();
            let found = row.chars().count();
            if found != Self::SIZE {
                return Err(ParseError::RowLength {
                    row: y,
                    expected: Self::SIZE,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let filled = parse_cell(ch).ok_or(ParseError::BadCell { row: y, col: x, ch })?;
                board.set(x, y, filled);
            }
        }
        Ok(board)
    }

    pub fn to_rows(&self) -> Vec<String> {
        (0..Self::SIZE)
            .map(|y| {
                (0..Self::SIZE)
                    .map(|x| if self.get(x, y) { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        Self::from_rows(&rows)
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_rows().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows: Vec<String> = Vec::deserialize(deserializer)?;
        Board::from_rows(&rows).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
