//! Blast search crate - exhaustive placement search and move replay.

mod config;
mod error;
mod permutation;
mod replay;
mod solver;

pub use config::SearchConfig;
pub use error::{ReplayError, SolveError};
pub use permutation::{PieceOrder, Permutations};
pub use replay::{final_board, replay, ReplayFrame};
pub use solver::{find_best_placement, PlacementSearch, Solution};

/// Upper bound on pieces per search. Cost grows as n! times up to 64^n.
pub const MAX_PIECES: usize = 3;
