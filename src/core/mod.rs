//! Core module - pure game logic with no I/O
//!
//! This module contains the board, the slide/merge engine, the spawn
//! policy, and the game facade. It has zero dependencies on UI or
//! networking; presentation layers talk to `Game` through its command and
//! query methods only.

pub mod board;
pub mod game;
pub mod movement;
pub mod rng;
pub mod snapshot;
pub mod spawn;

// Re-export commonly used types
pub use board::Board;
pub use game::Game;
pub use movement::{resolve, MoveOutcome};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
