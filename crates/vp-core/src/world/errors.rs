//! Level generation errors
//!
//! Construction errors (`InvalidLevel`, `InvalidDimension`, `DisconnectedGrid`)
//! abort level setup entirely. The rest are ordinary results the caller
//! branches on.

use thiserror::Error;

/// Errors raised while building, populating or opening a level
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("Invalid level number {0}: levels start at 1")]
    InvalidLevel(u32),

    #[error("Invalid maze dimension {dimension}: must be between 1 and {max}")]
    InvalidDimension { dimension: usize, max: usize },

    #[error("Maze construction stranded with {unvisited} unvisited cells")]
    DisconnectedGrid { unvisited: usize },

    #[error("All corners have already been opened")]
    NoCornersRemaining,

    #[error("Cannot place {requested} entities: only {available} free cells left")]
    InsufficientFreeCells { requested: usize, available: usize },

    #[error("Invalid placement count: minimum {minimum} exceeds maximum {maximum}")]
    InvalidPlacementCount { minimum: u32, maximum: u32 },

    #[error("Cell {cell} is outside a grid of {total} cells")]
    CellOutOfRange { cell: usize, total: usize },

    #[error("Level is not finished: no exit is open and hostiles remain")]
    LevelNotFinished,
}

impl LevelError {
    /// True for errors that mean the level could not be generated at all
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            LevelError::InvalidLevel(_)
                | LevelError::InvalidDimension { .. }
                | LevelError::DisconnectedGrid { .. }
                | LevelError::CellOutOfRange { .. }
        )
    }
}
