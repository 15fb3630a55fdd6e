//! Spawn module - adaptive post-move tile placement
//!
//! After a successful move the engine may drop a new tile onto the board.
//! The trigger probability rises as the board fills, and the kind
//! distribution widens as the board grows: a 4x4 board only ever spawns
//! Pawns, while a 9x9 board occasionally produces up to a Queen. King is
//! never a spawn candidate.

use crate::core::board::Board;
use crate::core::rng::SimpleRng;
use crate::types::{TileKind, SPAWN_CHANCE_CEIL, SPAWN_CHANCE_FLOOR};

/// Probability that a spawn fires after a successful move.
///
/// Zero on an empty board; otherwise `ceil - fill_ratio`, floored so a
/// board with any tiles always has at least the floor chance.
pub fn spawn_chance(board: &Board) -> f64 {
    let occupied = board.occupied_count();
    if occupied == 0 {
        return 0.0;
    }
    let total = f64::from(board.size()) * f64::from(board.size());
    let fill_ratio = occupied as f64 / total;
    (SPAWN_CHANCE_CEIL - fill_ratio).max(SPAWN_CHANCE_FLOOR)
}

/// Kind weights per board size. Each row sums to 1.
fn kind_weights(size: u8) -> &'static [(TileKind, f64)] {
    match size {
        4 => &[(TileKind::Pawn, 1.0)],
        5 => &[(TileKind::Pawn, 0.9), (TileKind::Knight, 0.1)],
        6 => &[
            (TileKind::Pawn, 0.8),
            (TileKind::Knight, 0.15),
            (TileKind::Bishop, 0.05),
        ],
        7 => &[
            (TileKind::Pawn, 0.7),
            (TileKind::Knight, 0.2),
            (TileKind::Bishop, 0.08),
            (TileKind::Rook, 0.02),
        ],
        8 => &[
            (TileKind::Pawn, 0.6),
            (TileKind::Knight, 0.25),
            (TileKind::Bishop, 0.1),
            (TileKind::Rook, 0.05),
        ],
        _ => &[
            (TileKind::Pawn, 0.5),
            (TileKind::Knight, 0.25),
            (TileKind::Bishop, 0.15),
            (TileKind::Rook, 0.08),
            (TileKind::Queen, 0.02),
        ],
    }
}

/// Pick the spawn kind for a board size from a uniform roll in [0, 1).
///
/// The first kind whose cumulative weight reaches the roll wins; if
/// floating-point rounding leaves the roll unmatched, fall back to Pawn.
pub fn spawn_kind(size: u8, roll: f64) -> TileKind {
    let mut cumulative = 0.0;
    for &(kind, weight) in kind_weights(size) {
        cumulative += weight;
        if cumulative >= roll {
            return kind;
        }
    }
    TileKind::Pawn
}

/// Roll the spawn chance and, on success, place a weighted-random kind in a
/// uniformly random empty cell. Returns true iff a tile was placed.
pub fn try_spawn(board: &mut Board, rng: &mut SimpleRng) -> bool {
    let chance = spawn_chance(board);
    if rng.next_f64() >= chance {
        return false;
    }

    let empty = board.empty_positions();
    if empty.is_empty() {
        return false;
    }

    let idx = rng.next_range(empty.len() as u32) as usize;
    let kind = spawn_kind(board.size(), rng.next_f64());
    board.place(kind, empty[idx]).is_ok()
}
