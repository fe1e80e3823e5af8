//! JSON puzzle files: a board and the pieces to place on it.
//!
//! ```json
//! {
//!   "board": ["........", "........", "........", "........",
//!             "........", "........", "........", ".#######"],
//!   "pieces": [["#"], ["##", "#."]]
//! }
//! ```
//!
//! `#` is a block and `.` an empty cell. Piece rows are trimmed to their
//! bounding box; a piece with no blocks is rejected.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use blast_core::{Board, Piece};
use blast_search::{PlacementSearch, Solution, SolveError, MAX_PIECES};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid puzzle: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{count} pieces given, at most {max} are supported")]
    TooManyPieces { count: usize, max: usize },
    #[error(transparent)]
    Solve(#[from] SolveError),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub board: Board,
    pub pieces: Vec<Piece>,
}

impl Puzzle {
    pub fn from_json(text: &str) -> Result<Self, PuzzleError> {
        let puzzle: Puzzle = serde_json::from_str(text)?;
        if puzzle.pieces.len() > MAX_PIECES {
            return Err(PuzzleError::TooManyPieces {
                count: puzzle.pieces.len(),
                max: MAX_PIECES,
            });
        }
        debug!(
            "puzzle: {} filled cells, {} pieces",
            puzzle.board.filled_cells(),
            puzzle.pieces.len()
        );
        Ok(puzzle)
    }

    pub fn load(path: &Path) -> Result<Self, PuzzleError> {
        let text = fs::read_to_string(path).map_err(|source| PuzzleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> Result<String, PuzzleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn solve(&self, search: &PlacementSearch) -> Result<Solution, PuzzleError> {
        Ok(search.solve(&self.board, &self.pieces)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW_GAP: &str = r###"{
        "board": ["........", "........", "........", "........",
                  "........", "........", "........", ".#######"],
        "pieces": [["#"], ["..", "##"]]
    }"###;

    #[test]
    fn test_parse_and_trim() {
        let puzzle = Puzzle::from_json(ROW_GAP).expect("valid puzzle");
        assert_eq!(puzzle.board.filled_cells(), 7);
        assert_eq!(puzzle.pieces[0], Piece::DOT);
        assert_eq!(puzzle.pieces[1].to_rows(), vec!["##"]);
    }

    #[test]
    fn test_solve_puzzle() {
        let puzzle = Puzzle::from_json(ROW_GAP).expect("valid puzzle");
        let solution = puzzle.solve(&PlacementSearch::default()).expect("solve");
        assert_eq!(solution.score, 1);
        assert_eq!(solution.move_count(), 2);
    }

    #[test]
    fn test_rejects_blank_piece() {
        let text = r###"{"board": ["........","........","........","........",
                                "........","........","........","........"],
                       "pieces": [["...", "..."]]}"###;
        let err = Puzzle::from_json(text).unwrap_err();
        assert!(matches!(err, PuzzleError::Json(_)));
        assert!(err.to_string().contains("no filled cells"));
    }

    #[test]
    fn test_rejects_four_pieces() {
        let text = r###"{"board": ["........","........","........","........",
                                "........","........","........","........"],
                       "pieces": [["#"], ["#"], ["#"], ["#"]]}"###;
        assert!(matches!(
            Puzzle::from_json(text),
            Err(PuzzleError::TooManyPieces { count: 4, max: 3 })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let puzzle = Puzzle::from_json(ROW_GAP).expect("valid puzzle");
        let text = puzzle.to_json().expect("serialize");
        assert_eq!(Puzzle::from_json(&text).expect("reparse"), puzzle);
    }
}
