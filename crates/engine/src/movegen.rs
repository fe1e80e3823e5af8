//! placement generation - every legal top-left corner, row-major

use blast_core::{Board, Piece};
use smallvec::SmallVec;

use crate::collision::{try_placement, Placement};

/// Every top-left corner of an 8x8 board
pub const MAX_PLACEMENTS: usize = Board::SIZE * Board::SIZE;

/// Legal placements in generation order; never spills for an 8x8 board
pub type PlacementList = SmallVec<[Placement; MAX_PLACEMENTS]>;

/// All legal placements of `piece`, y outer and x inner.
/// The order is what ties are broken on, so callers must not reorder.
pub fn generate_placements(board: &Board, piece: &Piece) -> PlacementList {
    let mut list = PlacementList::new();
    let max_y = (Board::SIZE - piece.height()) as i8;
    let max_x = (Board::SIZE - piece.width()) as i8;
    for y in 0..=max_y {
        for x in 0..=max_x {
            if let Some(placement) = try_placement(board, piece, x, y) {
                list.push(placement);
            }
        }
    }
    list
}

/// Number of legal placements without building the list
pub fn count_placements(board: &Board, piece: &Piece) -> usize {
    let max_y = (Board::SIZE - piece.height()) as i8;
    let max_x = (Board::SIZE - piece.width()) as i8;
    (0..=max_y)
        .flat_map(|y| (0..=max_x).map(move |x| (x, y)))
        .filter(|&(x, y)| try_placement(board, piece, x, y).is_some())
        .count()
}
