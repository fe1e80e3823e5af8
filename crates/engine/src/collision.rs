//! collision detection - board edges and occupied cells

use blast_core::{Board, Move, Piece};

/// A placement already checked against a board: in range and on empty cells.
/// Only [`try_placement`] builds one, so `place` never sees an unchecked spot.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Placement {
    piece: Piece,
    x: i8,
    y: i8,
    mask: u64,
}

impl Placement {
    #[inline(always)]
    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    #[inline(always)]
    pub fn x(&self) -> i8 {
        self.x
    }

    #[inline(always)]
    pub fn y(&self) -> i8 {
        self.y
    }

    /// Board cells covered by the piece
    #[inline(always)]
    pub fn mask(&self) -> u64 {
        self.mask
    }

    /// Move record for this placement, before any clears
    pub fn to_move(&self) -> Move {
        Move::new(self.piece, self.x, self.y)
    }
}

/// Check the piece with its top-left corner at (x, y) and keep the result.
#[inline]
pub fn try_placement(board: &Board, piece: &Piece, x: i8, y: i8) -> Option<Placement> {
    let mask = piece.mask_at(x, y)?;
    if board.overlaps(mask) {
        return None;
    }
    Some(Placement {
        piece: *piece,
        x,
        y,
        mask,
    })
}

/// can we place here? every block on the board and on an empty cell
pub fn can_place(board: &Board, piece: &Piece, x: i8, y: i8) -> bool {
    try_placement(board, piece, x, y).is_some()
}

/// does the piece hit an edge or a filled cell? (just !can_place)
#[inline(always)]
pub fn collides(board: &Board, piece: &Piece, x: i8, y: i8) -> bool {
    !can_place(board, piece, x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(text: &str) -> Piece {
        text.parse().expect("valid piece")
    }

    #[test]
    fn test_empty_board_accepts_in_range() {
        let board = Board::new();
        let square = piece("##\n##");
        assert!(can_place(&board, &square, 0, 0));
        assert!(can_place(&board, &square, 6, 6));
    }

    #[test]
    fn test_collision_with_edges() {
        let board = Board::new();
        let square = piece("##\n##");
        assert!(collides(&board, &square, 7, 0));
        assert!(collides(&board, &square, 0, 7));
        assert!(collides(&board, &square, -1, 0));
        assert!(collides(&board, &square, 0, -1));
    }

    #[test]
    fn test_collision_with_filled_cell() {
        let mut board = Board::new();
        board.set(4, 4, true);
        let square = piece("##\n##");
        assert!(collides(&board, &square, 3, 3));
        assert!(collides(&board, &square, 4, 4));
        assert!(can_place(&board, &square, 5, 5));
    }

    #[test]
    fn test_hole_in_piece_fits_around_block() {
        let mut board = Board::new();
        board.set(1, 1, true);
        let ring = piece("###\n#.#\n###");
        assert!(can_place(&board, &ring, 0, 0));
        assert!(collides(&board, &ring, 1, 1));
    }

    #[test]
    fn test_placement_carries_position() {
        let board = Board::new();
        let dot = Piece::DOT;
        let placement = try_placement(&board, &dot, 3, 5).expect("fits");
        assert_eq!((placement.x(), placement.y()), (3, 5));
        assert_eq!(placement.mask(), 1u64 << (5 * 8 + 3));
        assert_eq!(placement.to_move(), Move::new(dot, 3, 5));
    }
}
