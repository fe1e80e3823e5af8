//! perft - counts complete placement sequences for a fixed piece order
//! dead-end branches contribute nothing, exactly like the solver's search tree

use blast_core::{Board, Piece};
use rayon::prelude::*;

use crate::apply::apply_move;
use crate::movegen::{count_placements, generate_placements};

/// Leaf count of the placement tree: one leaf per way to place every piece in order.
pub fn perft(board: &Board, queue: &[Piece]) -> u64 {
    match queue {
        [] => 1,
        [last] => count_placements(board, last) as u64,
        [first, rest @ ..] => {
            let mut nodes = 0u64;
            for placement in generate_placements(board, first) {
                let (next, _) = apply_move(board, &placement);
                nodes += perft(&next, rest);
            }
            nodes
        }
    }
}

/// Parallel perft - splits top-level placements across threads
pub fn perft_parallel(board: &Board, queue: &[Piece]) -> u64 {
    let Some((first, rest)) = queue.split_first() else {
        return 1;
    };
    if rest.is_empty() {
        return count_placements(board, first) as u64;
    }
    generate_placements(board, first)
        .par_iter()
        .map(|placement| {
            let (next, _) = apply_move(board, placement);
            perft(&next, rest)
        })
        .sum()
}
