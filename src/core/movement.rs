//! Movement module - directional slide/merge resolution
//!
//! A move is resolved in a single pass over a snapshot of the occupied
//! tiles, ordered so the tiles farthest along the travel direction go first.
//! Each tile slides through the working result board until it hits the edge
//! or an obstacle; an equal-kind obstacle absorbs it as a merge. Because a
//! merged tile is only ever an obstacle for the rest of the pass, a tile can
//! merge at most once per move and promotions never cascade.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::types::{Direction, Position, TileKind, MAX_CELLS};

/// Result of resolving one directional move against a board.
#[derive(Debug, Clone)]
pub struct MoveOutcome {
    /// The board after all slides and merges (expansion not yet applied).
    pub board: Board,
    /// True iff any tile changed cell or kind.
    pub moved: bool,
    /// Points earned by merges during this move.
    pub points: u32,
    /// Set when a King+King annihilation asks for the board to grow.
    pub expand_pending: bool,
}

/// Resolve a slide in `direction` without mutating the input board.
pub fn resolve(board: &Board, direction: Direction) -> MoveOutcome {
    let mut result = board.clone();
    let mut moved = false;
    let mut points: u32 = 0;
    let mut expand_pending = false;

    // Snapshot of movers; the board never exceeds MAX_CELLS tiles.
    let mut tiles: ArrayVec<(Position, TileKind), MAX_CELLS> = ArrayVec::new();
    for pos in board.occupied_positions() {
        if let Some(kind) = board.at(pos) {
            tiles.push((pos, kind));
        }
    }
    sort_for_direction(&mut tiles, direction);

    for (origin, kind) in tiles {
        let (dest, merge) = slide_destination(&result, origin, kind, direction);
        if dest == origin {
            continue;
        }

        moved = true;
        result.set(origin, None);

        if merge {
            match kind.successor() {
                Some(next) => {
                    result.set(dest, Some(next));
                    points += next.point_value();
                }
                // Top of the chain: both tiles annihilate and the board
                // grows once the pass is over.
                None => {
                    result.set(dest, None);
                    points += kind.point_value();
                    expand_pending = true;
                }
            }
        } else {
            result.set(dest, Some(kind));
        }
    }

    MoveOutcome {
        board: result,
        moved,
        points,
        expand_pending,
    }
}

/// Order tiles so the ones farthest along the travel direction move first,
/// letting trailing tiles slide into cells vacated in the same pass.
fn sort_for_direction(tiles: &mut ArrayVec<(Position, TileKind), MAX_CELLS>, direction: Direction) {
    match direction {
        Direction::Right => tiles.sort_by(|a, b| b.0.col.cmp(&a.0.col)),
        Direction::Left => tiles.sort_by(|a, b| a.0.col.cmp(&b.0.col)),
        Direction::Down => tiles.sort_by(|a, b| b.0.row.cmp(&a.0.row)),
        Direction::Up => tiles.sort_by(|a, b| a.0.row.cmp(&b.0.row)),
    }
}

/// Scan strictly ahead of `origin` in the travel direction, against the
/// working board, and return the destination cell plus whether it merges.
fn slide_destination(
    board: &Board,
    origin: Position,
    kind: TileKind,
    direction: Direction,
) -> (Position, bool) {
    let (dr, dc) = direction.delta();
    let mut dest = origin;
    let mut cursor = Position::new(origin.row + dr, origin.col + dc);

    while board.is_valid_position(cursor) {
        match board.at(cursor) {
            Some(obstacle) => {
                if obstacle == kind {
                    return (cursor, true);
                }
                // Unequal obstacle: stop short at the last empty cell.
                break;
            }
            None => dest = cursor,
        }
        cursor = Position::new(cursor.row + dr, cursor.col + dc);
    }

    (dest, false)
}
