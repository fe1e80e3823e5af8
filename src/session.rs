//! Headless editor flow: paint the board, paint up to three pieces, solve,
//! then step through the answer.
//!
//! Every (phase, event) pair that does something is listed in
//! [`Session::transition`]; anything else is an `InvalidTransition`.

use blast_core::{Board, Canvas, Piece, MAX_PIECE_SIZE};
use blast_search::{
    replay, PlacementSearch, ReplayError, ReplayFrame, Solution, SolveError, MAX_PIECES,
};
use log::{debug, info};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Painting the board
    Map,
    /// Painting piece `n` (0-based)
    Piece(usize),
    /// All pieces in, waiting to solve
    Ready,
    /// Showing move `n` of the solution
    Replay(usize),
    /// Nothing fits
    NoSolution,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Next,
    Back,
    Reset,
    ShowAgain,
    Toggle { x: usize, y: usize },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{event:?} does nothing in {phase:?}")]
    InvalidTransition { phase: Phase, event: Event },
    #[error("cell ({x}, {y}) is outside the grid")]
    OutOfBounds { x: usize, y: usize },
    #[error("piece {} has no filled cells", .index + 1)]
    EmptyPiece { index: usize },
    #[error(transparent)]
    Solve(#[from] SolveError),
    #[error(transparent)]
    Replay(#[from] ReplayError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    ToggleBoard { x: usize, y: usize },
    ToggleCanvas { index: usize, x: usize, y: usize },
    AcceptPiece(usize),
    StartPieces,
    BackToMap,
    ReopenPiece(usize),
    Solve,
    StepReplay(usize),
    RestartReplay(usize),
    Reset,
}

pub struct Session {
    phase: Phase,
    board: Board,
    canvases: [Canvas; MAX_PIECES],
    pieces: Vec<Piece>,
    solution: Option<Solution>,
    frames: Vec<ReplayFrame>,
    search: PlacementSearch,
}

impl Session {
    pub fn new() -> Self {
        Self::with_search(PlacementSearch::default())
    }

    pub fn with_search(search: PlacementSearch) -> Self {
        Self {
            phase: Phase::Map,
            board: Board::new(),
            canvases: [Canvas::EMPTY; MAX_PIECES],
            pieces: Vec::with_capacity(MAX_PIECES),
            solution: None,
            frames: Vec::new(),
            search,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn canvas(&self, index: usize) -> Option<&Canvas> {
        self.canvases.get(index)
    }

    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Frame for the move currently on display
    pub fn current_frame(&self) -> Option<&ReplayFrame> {
        match self.phase {
            Phase::Replay(step) => self.frames.get(step),
            _ => None,
        }
    }

    /// The transition table. `None` means the event is not accepted here.
    fn transition(phase: Phase, event: Event) -> Option<Action> {
        use Event::*;

        let action = match (phase, event) {
            (Phase::Map, Toggle { x, y }) => Action::ToggleBoard { x, y },
            (Phase::Map, Next) => Action::StartPieces,
            (Phase::Piece(index), Toggle { x, y }) => Action::ToggleCanvas { index, x, y },
            (Phase::Piece(index), Next) => Action::AcceptPiece(index),
            (Phase::Piece(0), Back) => Action::BackToMap,
            (Phase::Piece(index), Back) => Action::ReopenPiece(index - 1),
            (Phase::Ready, Next) => Action::Solve,
            (Phase::Ready | Phase::NoSolution, Reset) => Action::Reset,
            (Phase::Replay(step), Next) => Action::StepReplay(step),
            (Phase::Replay(step), ShowAgain) => Action::RestartReplay(step),
            _ => return None,
        };
        Some(action)
    }

    /// Feed one editor event and return the phase it leads to.
    pub fn handle(&mut self, event: Event) -> Result<Phase, SessionError> {
        let phase = self.phase;
        let action =
            Self::transition(phase, event).ok_or(SessionError::InvalidTransition { phase, event })?;

        self.phase = match action {
            Action::ToggleBoard { x, y } => {
                if x >= Board::SIZE || y >= Board::SIZE {
                    return Err(SessionError::OutOfBounds { x, y });
                }
                self.board.toggle(x, y);
                phase
            }
            Action::ToggleCanvas { index, x, y } => {
                if x >= MAX_PIECE_SIZE || y >= MAX_PIECE_SIZE {
                    return Err(SessionError::OutOfBounds { x, y });
                }
                self.canvases[index].toggle(x, y);
                phase
            }
            Action::StartPieces => Phase::Piece(0),
            Action::AcceptPiece(index) => {
                let piece = self.canvases[index]
                    .trim()
                    .ok_or(SessionError::EmptyPiece { index })?;
                self.pieces.push(piece);
                if index + 1 < MAX_PIECES {
                    Phase::Piece(index + 1)
                } else {
                    Phase::Ready
                }
            }
            Action::BackToMap => Phase::Map,
            Action::ReopenPiece(index) => {
                self.pieces.pop();
                self.canvases[index] = Canvas::EMPTY;
                Phase::Piece(index)
            }
            Action::Solve => self.solve()?,
            Action::StepReplay(step) => {
                if step + 1 < self.frames.len() {
                    Phase::Replay(step + 1)
                } else {
                    self.commit();
                    Phase::Piece(0)
                }
            }
            Action::RestartReplay(step) => {
                if step + 1 < self.frames.len() {
                    return Err(SessionError::InvalidTransition { phase, event });
                }
                Phase::Replay(0)
            }
            Action::Reset => {
                *self = Self::with_search(std::mem::take(&mut self.search));
                Phase::Map
            }
        };

        debug!("{:?} --{:?}--> {:?}", phase, event, self.phase);
        Ok(self.phase)
    }

    fn solve(&mut self) -> Result<Phase, SessionError> {
        let solution = self.search.solve(&self.board, &self.pieces)?;
        if solution.is_empty() {
            info!("no placement fits");
            self.solution = Some(solution);
            return Ok(Phase::NoSolution);
        }
        self.frames = replay(&self.board, &solution.moves)?;
        self.solution = Some(solution);
        Ok(Phase::Replay(0))
    }

    /// Take the replayed result as the new board and start the next round of pieces.
    fn commit(&mut self) {
        if let Some(frame) = self.frames.last() {
            self.board = frame.board_after;
        }
        self.pieces.clear();
        self.canvases = [Canvas::EMPTY; MAX_PIECES];
        self.solution = None;
        self.frames.clear();
    }

    /// Prompt for the current phase
    pub fn status_text(&self) -> String {
        match self.phase {
            Phase::Map => "Click to toggle map units, then click next to continue.".to_string(),
            Phase::Piece(index) => format!("Create block {}. Click to toggle cells.", index + 1),
            Phase::Ready => "Ready to calculate.".to_string(),
            Phase::Replay(step) => format!(
                "Displaying move {}. Click next to see the next move.",
                step + 1
            ),
            Phase::NoSolution => "You're cooked.".to_string(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rejects_unlisted_pairs() {
        assert_eq!(Session::transition(Phase::Map, Event::Back), None);
        assert_eq!(Session::transition(Phase::Ready, Event::ShowAgain), None);
        assert_eq!(Session::transition(Phase::NoSolution, Event::Next), None);
        assert_eq!(
            Session::transition(Phase::Piece(2), Event::Back),
            Some(Action::ReopenPiece(1))
        );
    }

    #[test]
    fn test_toggle_out_of_bounds() {
        let mut session = Session::new();
        assert!(matches!(
            session.handle(Event::Toggle { x: 8, y: 0 }),
            Err(SessionError::OutOfBounds { x: 8, y: 0 })
        ));
        session.handle(Event::Next).expect("to pieces");
        assert!(matches!(
            session.handle(Event::Toggle { x: 0, y: 5 }),
            Err(SessionError::OutOfBounds { x: 0, y: 5 })
        ));
    }

    #[test]
    fn test_status_text_follows_phase() {
        let mut session = Session::new();
        assert!(session.status_text().starts_with("Click to toggle map"));
        session.handle(Event::Next).expect("to pieces");
        assert_eq!(session.status_text(), "Create block 1. Click to toggle cells.");
    }
}
