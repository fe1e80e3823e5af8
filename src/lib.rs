//! blast-calc - placement calculator for the 8x8 block puzzle (workspace facade crate).
//!
//! The rules and the search live in dedicated crates under `crates/`; this
//! package adds the puzzle file format, the headless editor session and the
//! command-line front end.

pub mod logging;
pub mod puzzle;
pub mod session;

pub use blast_core as core;
pub use blast_engine as engine;
pub use blast_search as search;

pub use puzzle::{Puzzle, PuzzleError};
pub use session::{Event, Phase, Session, SessionError};
