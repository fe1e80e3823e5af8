//! Lexicographic permutations over a small index array.

use smallvec::SmallVec;

use crate::MAX_PIECES;

/// Piece indices in the order they are to be placed
pub type PieceOrder = SmallVec<[usize; MAX_PIECES]>;

/// Every ordering of `0..n` in lexicographic order. `n = 0` yields one empty order.
pub struct Permutations {
    indices: PieceOrder,
    done: bool,
}

impl Permutations {
    pub fn new(n: usize) -> Self {
        debug_assert!(n <= MAX_PIECES, "permutations of {n} pieces requested");
        Self {
            indices: (0..n).collect(),
            done: false,
        }
    }
}

impl Iterator for Permutations {
    type Item = PieceOrder;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();
        self.done = !next_permutation(&mut self.indices);
        Some(current)
    }
}

/// Advance to the next lexicographic ordering in place; false once the last one is reached.
fn next_permutation(a: &mut [usize]) -> bool {
    if a.len() < 2 {
        return false;
    }
    let mut i = a.len() - 1;
    while i > 0 && a[i - 1] >= a[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = a.len() - 1;
    while a[j] <= a[i - 1] {
        j -= 1;
    }
    a.swap(i - 1, j);
    a[i..].reverse();
    true
}
