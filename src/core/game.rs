//! Game module - the synchronous command/query surface of the engine
//!
//! `Game` owns the board, the RNG, and the score, and is their only
//! mutator. Callers issue one command at a time (`make_move`, `place`,
//! `remove`, `expand`) and read the results through queries; nothing here
//! suspends, retries, or caches.

use crate::core::board::Board;
use crate::core::movement;
use crate::core::rng::SimpleRng;
use crate::core::snapshot::GameSnapshot;
use crate::core::spawn;
use crate::types::{Cell, Direction, GameState, GridError, Position, TileKind};

/// Complete engine state: board, random source, and score.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    rng: SimpleRng,
    score: u32,
}

impl Game {
    /// Create a new game: a 4x4 board seeded with one Pawn at a random cell.
    pub fn new(seed: u32) -> Self {
        let mut board = Board::new();
        let mut rng = SimpleRng::new(seed);

        let cell_count = u32::from(board.size()) * u32::from(board.size());
        let idx = rng.next_range(cell_count);
        let pos = Position::new(
            (idx / u32::from(board.size())) as i8,
            (idx % u32::from(board.size())) as i8,
        );
        // The cell index is in range by construction.
        let _ = board.place(TileKind::Pawn, pos);

        Self {
            board,
            rng,
            score: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current edge length of the board
    pub fn size(&self) -> u8 {
        self.board.size()
    }

    /// Running score; increases only on merges.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current RNG state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    /// Query the tile at a position.
    pub fn tile(&self, pos: Position) -> Result<Cell, GridError> {
        self.board.get(pos)
    }

    /// Check whether a cell is empty.
    pub fn is_empty(&self, pos: Position) -> Result<bool, GridError> {
        self.board.is_empty(pos)
    }

    /// Place a tile directly, overwriting any occupant.
    pub fn place(&mut self, kind: TileKind, pos: Position) -> Result<(), GridError> {
        self.board.place(kind, pos)
    }

    /// Remove the tile at a position, if any.
    pub fn remove(&mut self, pos: Position) -> Result<(), GridError> {
        self.board.remove(pos)
    }

    /// Slide all tiles in `direction`, resolving merges, growing the board
    /// on a King+King collision, and (when `allow_spawn` is set) possibly
    /// dropping a new tile afterwards.
    ///
    /// Returns true iff any tile changed cell or kind. The spawn outcome
    /// never affects the return value.
    pub fn make_move(&mut self, direction: Direction, allow_spawn: bool) -> bool {
        let outcome = movement::resolve(&self.board, direction);
        if !outcome.moved {
            return false;
        }

        self.board = outcome.board;
        self.score = self.score.saturating_add(outcome.points);
        if outcome.expand_pending {
            self.board.expand();
        }
        if allow_spawn {
            spawn::try_spawn(&mut self.board, &mut self.rng);
        }

        true
    }

    /// Grow the board by one row and column. False at the maximum size.
    pub fn expand(&mut self) -> bool {
        self.board.expand()
    }

    /// Classify the board: Victory when cleared, Loss when jammed,
    /// Playing otherwise. Derived on every call, never stored.
    pub fn state(&self) -> GameState {
        if self.board.occupied_count() == 0 {
            return GameState::Victory;
        }
        if self.board.is_full() && !self.has_adjacent_equal_pair() {
            return GameState::Loss;
        }
        GameState::Playing
    }

    /// All occupied positions, recomputed per call
    pub fn occupied_positions(&self) -> Vec<Position> {
        self.board.occupied_positions()
    }

    /// All empty positions, recomputed per call
    pub fn empty_positions(&self) -> Vec<Position> {
        self.board.empty_positions()
    }

    /// Flat serializable copy of the observable state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            size: self.board.size(),
            cells: self.board.cells().to_vec(),
            score: self.score,
            state: self.state(),
        }
    }

    /// Scan right and down neighbors for an equal-kind pair; by symmetry
    /// that covers every orthogonal adjacency once.
    fn has_adjacent_equal_pair(&self) -> bool {
        let size = self.board.size() as i8;
        for row in 0..size {
            for col in 0..size {
                let here = self.board.at(Position::new(row, col));
                if here.is_none() {
                    continue;
                }
                if here == self.board.at(Position::new(row, col + 1))
                    || here == self.board.at(Position::new(row + 1, col))
                {
                    return true;
                }
            }
        }
        false
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
