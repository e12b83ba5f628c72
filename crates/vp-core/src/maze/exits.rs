//! Level exits
//!
//! The four corner cells are the only exit candidates. Corners are opened one
//! at a time, on demand, in random order; each opens at most once per level.

use log::info;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::cell::Direction;
use super::grid::Grid;
use crate::rng::GameRng;
use crate::world::errors::LevelError;

/// One of the four corner cells of the maze
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Corner {
    SouthWest = 1,
    SouthEast = 2,
    NorthWest = 3,
    NorthEast = 4,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::SouthWest,
        Corner::SouthEast,
        Corner::NorthWest,
        Corner::NorthEast,
    ];

    /// Cell index of this corner on a `dimension`-wide grid
    pub const fn cell_index(self, dimension: usize) -> usize {
        match self {
            Corner::SouthWest => 0,
            Corner::SouthEast => dimension - 1,
            Corner::NorthWest => dimension * (dimension - 1),
            Corner::NorthEast => dimension * dimension - 1,
        }
    }

    /// The two boundary walls knocked down to open this corner
    pub const fn boundary_walls(self) -> [Direction; 2] {
        match self {
            Corner::SouthWest => [Direction::South, Direction::West],
            Corner::SouthEast => [Direction::South, Direction::East],
            Corner::NorthWest => [Direction::West, Direction::North],
            Corner::NorthEast => [Direction::East, Direction::North],
        }
    }
}

/// Corners not yet turned into exits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitOpener {
    remaining: Vec<Corner>,
}

impl Default for ExitOpener {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitOpener {
    /// All four corners closed
    pub fn new() -> Self {
        Self {
            remaining: Corner::ALL.to_vec(),
        }
    }

    pub fn remaining(&self) -> &[Corner] {
        &self.remaining
    }

    pub fn is_closed(&self, corner: Corner) -> bool {
        self.remaining.contains(&corner)
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Open a random closed corner of `grid`
    ///
    /// Knocks down the corner cell's two boundary walls and tags it as an exit.
    /// The returned corner is what the exit notification carries.
    pub fn open_random_corner(
        &mut self,
        grid: &mut Grid,
        rng: &mut GameRng,
    ) -> Result<Corner, LevelError> {
        let idx = rng
            .choose_index(self.remaining.len())
            .ok_or(LevelError::NoCornersRemaining)?;
        let corner = self.remaining.remove(idx);

        let cell = corner.cell_index(grid.dimension());
        for dir in corner.boundary_walls() {
            grid.remove_wall(cell, dir)?;
        }
        grid.mark_exit(cell);

        info!(
            "opened {corner} exit at cell {cell}, {} corners left",
            self.remaining.len()
        );
        Ok(corner)
    }
}
