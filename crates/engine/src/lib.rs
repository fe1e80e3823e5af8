//! blast-engine - placement rules for the 8x8 block puzzle.
//!
//! Feasibility checks, placing and clearing, row-major placement
//! generation and perft-style tree counting.

pub mod apply;
pub mod collision;
pub mod movegen;
pub mod perft;

pub use apply::{apply_move, apply_move_mut, place};
pub use collision::{can_place, collides, try_placement, Placement};
pub use movegen::{count_placements, generate_placements, PlacementList, MAX_PLACEMENTS};
pub use perft::{perft, perft_parallel};
