use blast_core::{Board, LineClear};

use crate::collision::Placement;

/// Fill the placement's cells. The placement was checked against this board.
#[inline]
pub fn place(board: &mut Board, placement: &Placement) {
    board.fill(placement.mask());
}

/// Place in-place, then run one clear pass
#[inline]
pub fn apply_move_mut(board: &mut Board, placement: &Placement) -> LineClear {
    place(board, placement);
    board.clear_lines()
}

/// Apply a placement to a copy of the board and return the copy and the lines cleared.
pub fn apply_move(board: &Board, placement: &Placement) -> (Board, LineClear) {
    let mut next = *board;
    let cleared = apply_move_mut(&mut next, placement);
    (next, cleared)
}
