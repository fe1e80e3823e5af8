//! Exhaustive placement search over every ordering of the piece set.

use blast_core::{Board, Move, Piece};
use blast_engine::{apply_move, generate_placements};
use log::{debug, info};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::permutation::Permutations;
use crate::{SearchConfig, SolveError, MAX_PIECES};

/// Best move sequence for a board and piece set.
///
/// `moves` are in the order they are played, which need not be the input
/// order. When nothing fits, `score` is 0, `moves` is empty and
/// `final_board` is the input board.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Solution {
    pub score: u32,
    pub moves: Vec<Move>,
    pub final_board: Board,
}

impl Solution {
    pub fn none(board: Board) -> Self {
        Self {
            score: 0,
            moves: Vec::new(),
            final_board: board,
        }
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Blocks left after the last move
    pub fn remaining_cells(&self) -> u32 {
        self.final_board.filled_cells()
    }

    /// Higher score wins; on equal score, fewer blocks left wins.
    /// Exact ties are not improvements, so the first one found stays.
    fn improves_on(score: u32, remaining: u32, incumbent: &Solution) -> bool {
        score > incumbent.score
            || (score == incumbent.score && remaining < incumbent.remaining_cells())
    }
}

/// Keep `incumbent` unless `candidate` is strictly better.
fn keep_better(incumbent: Option<Solution>, candidate: Solution) -> Option<Solution> {
    match incumbent {
        Some(best)
            if !Solution::improves_on(candidate.score, candidate.remaining_cells(), &best) =>
        {
            Some(best)
        }
        _ => Some(candidate),
    }
}

type PieceSeq = SmallVec<[Piece; MAX_PIECES]>;

pub struct PlacementSearch {
    pub config: SearchConfig,
}

impl PlacementSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Find the highest-scoring way to play every piece.
    ///
    /// Orderings are tried lexicographically; within one, each piece tries
    /// top-left corners row by row. Orderings that strand a piece yield
    /// nothing. More than [`MAX_PIECES`] pieces is refused.
    pub fn solve(&self, board: &Board, pieces: &[Piece]) -> Result<Solution, SolveError> {
        if pieces.len() > MAX_PIECES {
            return Err(SolveError::TooManyPieces {
                count: pieces.len(),
                max: MAX_PIECES,
            });
        }

        let orders = self.orders(pieces);
        let winners = self.run_orders(board, &orders);

        let best = winners.into_iter().flatten().fold(None, keep_better);
        let solution = best.unwrap_or_else(|| Solution::none(*board));

        info!(
            "search done: score {} in {} moves, {} cells left ({} orderings)",
            solution.score,
            solution.move_count(),
            solution.remaining_cells(),
            orders.len()
        );
        Ok(solution)
    }

    /// Shape sequences to explore, in lexicographic index order
    fn orders(&self, pieces: &[Piece]) -> Vec<PieceSeq> {
        let mut seen = FxHashSet::default();
        let mut orders = Vec::new();
        for order in Permutations::new(pieces.len()) {
            let seq: PieceSeq = order.iter().map(|&i| pieces[i]).collect();
            if self.config.skip_repeated_orders && !seen.insert(seq.clone()) {
                debug!("skipping repeated order {:?}", order);
                continue;
            }
            orders.push(seq);
        }
        orders
    }

    #[cfg(feature = "rayon")]
    fn run_orders(&self, board: &Board, orders: &[PieceSeq]) -> Vec<Option<Solution>> {
        use rayon::prelude::*;

        if self.config.parallel {
            orders
                .par_iter()
                .map(|seq| best_for_order(board, seq))
                .collect()
        } else {
            orders.iter().map(|seq| best_for_order(board, seq)).collect()
        }
    }

    #[cfg(not(feature = "rayon"))]
    fn run_orders(&self, board: &Board, orders: &[PieceSeq]) -> Vec<Option<Solution>> {
        orders.iter().map(|seq| best_for_order(board, seq)).collect()
    }
}

impl Default for PlacementSearch {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

/// Solve with the default configuration.
pub fn find_best_placement(board: &Board, pieces: &[Piece]) -> Result<Solution, SolveError> {
    PlacementSearch::default().solve(board, pieces)
}

/// Best complete sequence for one fixed ordering, if any ordering of
/// placements gets every piece down.
fn best_for_order(board: &Board, seq: &[Piece]) -> Option<Solution> {
    let mut best = None;
    let mut path = Vec::with_capacity(seq.len());
    explore(board, seq, &mut path, 0, &mut best);

    match &best {
        Some(found) => debug!(
            "order {:?}: score {}, {} cells left",
            seq.iter().map(|p| p.to_rows()).collect::<Vec<_>>(),
            found.score,
            found.remaining_cells()
        ),
        None => debug!("order of {} pieces dead-ends", seq.len()),
    }
    best
}

/// Depth-first over placements of `remaining[0]`, then the rest on the cleared board.
fn explore(
    board: &Board,
    remaining: &[Piece],
    path: &mut Vec<Move>,
    score: u32,
    best: &mut Option<Solution>,
) {
    let Some((piece, rest)) = remaining.split_first() else {
        let improves = best
            .as_ref()
            .map_or(true, |b| Solution::improves_on(score, board.filled_cells(), b));
        if improves {
            *best = Some(Solution {
                score,
                moves: path.clone(),
                final_board: *board,
            });
        }
        return;
    };

    for placement in generate_placements(board, piece) {
        let (next, cleared) = apply_move(board, &placement);
        let gained = cleared.count();
        path.push(placement.to_move().with_clear(cleared));
        explore(&next, rest, path, score + gained, best);
        path.pop();
    }
}
