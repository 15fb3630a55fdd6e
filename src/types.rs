//! Core types shared across the crate
//! This module contains pure data types with no dependencies on the engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Board size limits. A fresh game starts at the minimum; King+King merges
/// grow the board one row/column at a time up to the maximum.
pub const MIN_GRID_SIZE: u8 = 4;
pub const MAX_GRID_SIZE: u8 = 9;

/// Upper bound on cell count, used for fixed-capacity scratch buffers.
pub const MAX_CELLS: usize = (MAX_GRID_SIZE as usize) * (MAX_GRID_SIZE as usize);

/// Spawn policy constants. The spawn chance falls linearly with free space
/// but never below the floor once any tile is on the board.
pub const SPAWN_CHANCE_FLOOR: f64 = 0.7;
pub const SPAWN_CHANCE_CEIL: f64 = 1.0;

/// A cell coordinate on the board.
///
/// Coordinates are signed so that out-of-range inputs from callers can be
/// represented and rejected instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }
}

/// Tile kinds, ordered by rank. Two equal tiles merge into the successor of
/// their kind; King is the top of the chain and has no successor — a
/// King+King collision annihilates both tiles and grows the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl TileKind {
    /// All kinds in promotion order.
    pub const ALL: [TileKind; 6] = [
        TileKind::Pawn,
        TileKind::Knight,
        TileKind::Bishop,
        TileKind::Rook,
        TileKind::Queen,
        TileKind::King,
    ];

    /// The kind a merged pair promotes into. King has no successor.
    pub fn successor(self) -> Option<TileKind> {
        match self {
            TileKind::Pawn => Some(TileKind::Knight),
            TileKind::Knight => Some(TileKind::Bishop),
            TileKind::Bishop => Some(TileKind::Rook),
            TileKind::Rook => Some(TileKind::Queen),
            TileKind::Queen => Some(TileKind::King),
            TileKind::King => None,
        }
    }

    /// Points awarded when a merge produces (or, for King, consumes) this kind.
    pub fn point_value(self) -> u32 {
        match self {
            TileKind::Pawn => 2,
            TileKind::Knight => 4,
            TileKind::Bishop => 8,
            TileKind::Rook => 16,
            TileKind::Queen => 32,
            TileKind::King => 64,
        }
    }

    /// Parse tile kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pawn" => Some(TileKind::Pawn),
            "knight" => Some(TileKind::Knight),
            "bishop" => Some(TileKind::Bishop),
            "rook" => Some(TileKind::Rook),
            "queen" => Some(TileKind::Queen),
            "king" => Some(TileKind::King),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Pawn => "pawn",
            TileKind::Knight => "knight",
            TileKind::Bishop => "bishop",
            TileKind::Rook => "rook",
            TileKind::Queen => "queen",
            TileKind::King => "king",
        }
    }
}

/// Slide directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Per-step (row, col) offset when travelling in this direction.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Derived game classification, computed on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Victory,
    Loss,
}

/// Cell on the board (None = empty, Some = occupied by a tile kind)
pub type Cell = Option<TileKind>;

/// Errors reported by position-addressed board operations.
///
/// All errors are recoverable; callers may pre-validate coordinates or treat
/// the error as a no-op with a default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: i8, col: i8, size: u8 },
}
