//! Flat, serializable copy of everything an observer may render.
//!
//! External presentation layers (view-models, terminal renderers, bots)
//! consume snapshots instead of borrowing the live board, so the engine
//! stays the single owner of its state.

use serde::{Deserialize, Serialize};

use crate::types::{Cell, GameState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Current edge length of the board.
    pub size: u8,
    /// Row-major copy of the cells, `size * size` entries.
    pub cells: Vec<Cell>,
    pub score: u32,
    pub state: GameState,
}

impl GameSnapshot {
    /// Cell lookup in snapshot coordinates; None when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.size as usize || col >= self.size as usize {
            return None;
        }
        self.cells.get(row * self.size as usize + col).copied()
    }
}
