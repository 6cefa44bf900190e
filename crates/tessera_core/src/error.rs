//! Error types for the tile engine.
//!
//! Configuration errors surface from `World::load` before any tile exists.
//! Stepping errors only appear when the diagnostic exchange timeout is
//! enabled or a worker disappears mid-generation.

use crate::direction::Direction;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Tile {tile} timed out waiting for its {direction:?} boundary message")]
    ExchangeTimeout { tile: usize, direction: Direction },

    #[error("Tile {tile} lost its {direction:?} link")]
    Disconnected { tile: usize, direction: Direction },

    #[error("Tile {tile} received a malformed {direction:?} boundary message")]
    Protocol { tile: usize, direction: Direction },

    #[error("Only {received} of {expected} tile workers reported completion")]
    WorkerLost { received: usize, expected: usize },

    #[error("World is poisoned after a failed generation {generation}")]
    Poisoned { generation: u64 },

    #[error("Cell ({row}, {col}) tracks {found} live neighbors but has {expected}")]
    InvariantViolation {
        row: usize,
        col: usize,
        expected: u8,
        found: u8,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    #[must_use]
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}
