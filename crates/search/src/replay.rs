//! Step-by-step re-application of a solved move sequence.

use blast_core::{Board, LineClear, Move};
use blast_engine::{apply_move_mut, place, try_placement};
use log::trace;
use serde::Serialize;

use crate::ReplayError;

/// One step of a replay: the board with the piece dropped in (before the
/// clear), the board after the clear, and the lines to highlight.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct ReplayFrame {
    pub step: usize,
    pub mv: Move,
    pub board_placed: Board,
    pub board_after: Board,
    pub cleared: LineClear,
    pub total_score: u32,
}

impl ReplayFrame {
    /// Text view of the placed board: `@` the new piece, `*` blocks on a
    /// cleared line, `#` other blocks, `.` empty.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(Board::SIZE * (Board::SIZE + 1));
        for y in 0..Board::SIZE {
            for x in 0..Board::SIZE {
                let dx = x as i64 - self.mv.x as i64;
                let dy = y as i64 - self.mv.y as i64;
                let in_piece = dx >= 0 && dy >= 0 && self.mv.piece.get(dx as usize, dy as usize);
                let ch = if in_piece {
                    '@'
                } else if !self.board_placed.get(x, y) {
                    '.'
                } else if self.cleared.contains_row(y) || self.cleared.contains_col(x) {
                    '*'
                } else {
                    '#'
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

/// Replay `moves` from `board`, placing then clearing once per move.
///
/// Fails if a move does not fit or clears different lines than it recorded;
/// either means the sequence was not produced from this board.
pub fn replay(board: &Board, moves: &[Move]) -> Result<Vec<ReplayFrame>, ReplayError> {
    let mut current = *board;
    let mut total_score = 0u32;
    let mut frames = Vec::with_capacity(moves.len());

    for (step, mv) in moves.iter().enumerate() {
        let placement =
            try_placement(&current, &mv.piece, mv.x, mv.y).ok_or(ReplayError::Blocked {
                step,
                x: mv.x,
                y: mv.y,
            })?;

        let mut board_placed = current;
        place(&mut board_placed, &placement);
        let mut board_after = board_placed;
        let cleared = board_after.clear_lines();

        if cleared != mv.cleared || cleared.count() != mv.lines_cleared as u32 {
            return Err(ReplayError::ClearMismatch {
                step,
                recorded: mv.cleared.clone(),
                replayed: cleared,
            });
        }

        total_score += cleared.count();
        trace!(
            "replay step {}: ({}, {}) cleared {} lines",
            step,
            mv.x,
            mv.y,
            cleared.count()
        );

        frames.push(ReplayFrame {
            step,
            mv: mv.clone(),
            board_placed,
            board_after,
            cleared,
            total_score,
        });
        current = board_after;
    }

    Ok(frames)
}

/// Board after every move, without the per-step detail
pub fn final_board(board: &Board, moves: &[Move]) -> Result<Board, ReplayError> {
    let mut current = *board;
    for (step, mv) in moves.iter().enumerate() {
        let placement =
            try_placement(&current, &mv.piece, mv.x, mv.y).ok_or(ReplayError::Blocked {
                step,
                x: mv.x,
                y: mv.y,
            })?;
        apply_move_mut(&mut current, &placement);
    }
    Ok(current)
}
