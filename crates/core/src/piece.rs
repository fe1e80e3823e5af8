//! Painted canvases and the trimmed pieces made from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{parse_cell, Board, ParseError};

/// Side length of the canvas a piece is painted on.
pub const MAX_PIECE_SIZE: usize = 5;

/// Raw 5x5 editor canvas. Bit x of `rows[y]` is cell (x, y).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub struct Canvas {
    rows: [u8; MAX_PIECE_SIZE],
}

impl Canvas {
    pub const EMPTY: Self = Self {
        rows: [0; MAX_PIECE_SIZE],
    };

    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Cells outside the canvas read as empty.
    pub fn get(&self, x: usize, y: usize) -> bool {
        Self::in_range(x, y) && (self.rows[y] >> x) & 1 == 1
    }

    /// # Panics
    /// If (x, y) is outside the 5x5 canvas.
    pub fn set(&mut self, x: usize, y: usize, filled: bool) {
        let bit = Self::bit(x, y);
        if filled {
            self.rows[y] |= bit;
        } else {
            self.rows[y] &= !bit;
        }
    }

    /// # Panics
    /// If (x, y) is outside the 5x5 canvas.
    pub fn toggle(&mut self, x: usize, y: usize) {
        self.rows[y] ^= Self::bit(x, y);
    }

    #[inline(always)]
    fn in_range(x: usize, y: usize) -> bool {
        x < MAX_PIECE_SIZE && y < MAX_PIECE_SIZE
    }

    #[inline(always)]
    fn bit(x: usize, y: usize) -> u8 {
        assert!(Self::in_range(x, y), "canvas cell ({x}, {y}) out of range");
        1 << x
    }

    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|&row| row == 0)
    }

    /// Read up to five rows of up to five cells; missing cells are empty.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, ParseError> {
        if rows.len() > MAX_PIECE_SIZE {
            return Err(ParseError::PieceTooLarge {
                max: MAX_PIECE_SIZE,
            });
        }
        let mut canvas = Self::new();
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref().trim();
            if row.chars().count() > MAX_PIECE_SIZE {
                return Err(ParseError::PieceTooLarge {
                    max: MAX_PIECE_SIZE,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let filled = parse_cell(ch).ok_or(ParseError::BadCell { row: y, col: x, ch })?;
                canvas.set(x, y, filled);
            }
        }
        Ok(canvas)
    }

    /// Cut the canvas down to the bounding box of its filled cells.
    ///
    /// Scans inward from the top, bottom, left and right edges and stops at
    /// the first row or column holding a block. Holes inside the box are
    /// kept. A blank canvas has no piece and yields `None`.
    pub fn trim(&self) -> Option<Piece> {
        let top = self.rows.iter().position(|&row| row != 0)?;
        let bottom = self.rows.iter().rposition(|&row| row != 0)?;

        let columns = self.rows.iter().fold(0u8, |acc, &row| acc | row);
        let left = columns.trailing_zeros() as usize;
        let right = 7 - columns.leading_zeros() as usize;

        let mut rows = [0u8; MAX_PIECE_SIZE];
        for (dst, &src) in rows.iter_mut().zip(&self.rows[top..=bottom]) {
            *dst = src >> left;
        }

        Some(Piece {
            rows,
            width: (right - left + 1) as u8,
            height: (bottom - top + 1) as u8,
        })
    }
}

/// A tightly bounded shape: every border row and column holds a block.
/// Only built through [`Canvas::trim`], so a piece is never empty.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Piece {
    rows: [u8; MAX_PIECE_SIZE],
    width: u8,
    height: u8,
}

impl Piece {
    /// Single 1x1 block
    pub const DOT: Self = Self {
        rows: [1, 0, 0, 0, 0],
        width: 1,
        height: 1,
    };

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.width as usize
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.height as usize
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        y < self.height() && x < self.width() && (self.rows[y] >> x) & 1 == 1
    }

    /// Filled cells as (dx, dy) offsets from the top-left corner, row-major
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height())
            .flat_map(move |y| (0..self.width()).map(move |x| (x, y)))
            .filter(move |&(x, y)| self.get(x, y))
    }

    pub fn cell_count(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }

    /// Board mask of this piece with its top-left corner at (x, y), or `None`
    /// if any block would fall off the board. The piece is tight, so the
    /// bounding box is in range exactly when every block is.
    pub fn mask_at(&self, x: i8, y: i8) -> Option<u64> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x + self.width() > Board::SIZE || y + self.height() > Board::SIZE {
            return None;
        }
        let mask = self.rows[..self.height()]
            .iter()
            .enumerate()
            .fold(0u64, |acc, (dy, &row)| {
                acc | ((row as u64) << ((y + dy) * Board::SIZE + x))
            });
        Some(mask)
    }

    /// Parse a text shape and trim it. Blank shapes are rejected.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, ParseError> {
        Canvas::from_rows(rows)?.trim().ok_or(ParseError::EmptyPiece)
    }

    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height())
            .map(|y| {
                (0..self.width())
                    .map(|x| if self.get(x, y) { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

impl FromStr for Piece {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        Self::from_rows(&rows)
    }
}

impl Serialize for Piece {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_rows().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Piece {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows: Vec<String> = Vec::deserialize(deserializer)?;
        Piece::from_rows(&rows).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_canvas_has_no_piece() {
        assert!(Canvas::new().is_blank());
        assert_eq!(Canvas::new().trim(), None);
    }

    #[test]
    fn test_single_cell_trims_to_dot() {
        let mut canvas = Canvas::new();
        canvas.set(3, 2, true);
        let piece = canvas.trim().expect("one cell is a piece");
        assert_eq!(piece, Piece::DOT);
        assert_eq!((piece.width(), piece.height()), (1, 1));
    }

    #[test]
    fn test_trim_keeps_holes() {
        let canvas = Canvas::from_rows(&[".....", ".#.#.", ".....", ".#.#.", "....."])
            .expect("valid canvas");
        let piece = canvas.trim().expect("piece");
        assert_eq!(piece.width(), 3);
        assert_eq!(piece.height(), 3);
        assert_eq!(piece.to_rows(), vec!["#.#", "...", "#.#"]);
        assert_eq!(piece.cell_count(), 4);
    }

    #[test]
    fn test_trim_full_canvas() {
        let canvas = Canvas::from_rows(&["#####"; 5]).expect("valid canvas");
        let piece = canvas.trim().expect("piece");
        assert_eq!((piece.width(), piece.height()), (5, 5));
        assert_eq!(piece.cell_count(), 25);
    }

    #[test]
    fn test_toggle_twice_is_blank() {
        let mut canvas = Canvas::new();
        canvas.toggle(4, 4);
        assert!(!canvas.is_blank());
        canvas.toggle(4, 4);
        assert!(canvas.is_blank());
    }

    #[test]
    fn test_canvas_get_off_canvas_is_empty() {
        let mut canvas = Canvas::new();
        canvas.set(4, 4, true);
        assert!(canvas.get(4, 4));
        assert!(!canvas.get(5, 4));
        assert!(!canvas.get(4, 5));
        assert!(!canvas.get(usize::MAX, 0));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_canvas_toggle_past_bottom_panics() {
        Canvas::new().toggle(0, 5);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_canvas_set_past_right_edge_panics() {
        // bit 5 of a row would otherwise be written silently
        Canvas::new().set(5, 0, true);
    }

    #[test]
    fn test_cells_row_major() {
        let piece: Piece = "#.\n##".parse().expect("L piece");
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_mask_at_bounds() {
        let bar: Piece = "####".parse().expect("bar");
        assert_eq!(bar.mask_at(0, 0), Some(0x0F));
        assert_eq!(bar.mask_at(4, 7), Some(0xF0u64 << 56));
        assert_eq!(bar.mask_at(5, 0), None);
        assert_eq!(bar.mask_at(-1, 0), None);
        assert_eq!(bar.mask_at(0, 8), None);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("...\n...".parse::<Piece>(), Err(ParseError::EmptyPiece));
        assert_eq!(
            "######".parse::<Piece>(),
            Err(ParseError::PieceTooLarge { max: MAX_PIECE_SIZE })
        );
        assert!(matches!(
            Piece::from_rows(&["#a"]),
            Err(ParseError::BadCell { row: 0, col: 1, ch: 'a' })
        ));
    }

    #[test]
    fn test_serde_rejects_blank_piece() {
        let piece: Piece = serde_json::from_str(r###"["##", "#."]"###).expect("piece");
        assert_eq!(piece.cell_count(), 3);
        assert!(serde_json::from_str::<Piece>(r###"["..", ".."]"###).is_err());
    }
}
