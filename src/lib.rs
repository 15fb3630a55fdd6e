//! gridmerge - a sliding-tile merge engine with a promotion chain.
//!
//! Tiles slide in one of four directions; equal neighbors merge into the
//! next kind up the chain. Merging the top kind clears both tiles and grows
//! the board, up to 9x9. The engine is fully synchronous and owns all of
//! its state; see [`core::Game`] for the command/query surface.

pub mod core;
pub mod types;

pub use crate::core::{Board, Game, GameSnapshot, SimpleRng};
pub use crate::types::{Cell, Direction, GameState, GridError, Position, TileKind};
