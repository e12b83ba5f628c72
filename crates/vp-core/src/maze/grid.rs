//! Square cell grid with shared walls
//!
//! Cells are stored row-major in a flat vector (`index = row * dimension + col`),
//! row 0 being the southern edge. Walls between two cells are stored on both
//! sides and always kept in agreement by [`Grid::remove_wall`].

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Direction};
use crate::world::errors::LevelError;
use crate::{DIMENSION_CEILING, MAX_DIMENSION};

/// The maze grid for one level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    dimension: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a closed `dimension x dimension` grid
    pub fn new(dimension: usize) -> Result<Self, LevelError> {
        Self::with_limit(dimension, MAX_DIMENSION)
    }

    /// Create a closed grid, rejecting dimensions above `max_dimension`
    ///
    /// `max_dimension` is itself capped at [`DIMENSION_CEILING`].
    pub fn with_limit(dimension: usize, max_dimension: usize) -> Result<Self, LevelError> {
        let max = max_dimension.min(DIMENSION_CEILING);
        let total = dimension.checked_mul(dimension);
        match total {
            Some(total) if dimension > 0 && dimension <= max => Ok(Self {
                dimension,
                cells: vec![Cell::closed(); total],
            }),
            _ => Err(LevelError::InvalidDimension { dimension, max }),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Index of the center cell, where construction starts and the player spawns
    pub fn center(&self) -> usize {
        (self.total_cells() - 1) / 2
    }

    /// `(row, col)` of a cell index
    pub fn row_col(&self, index: usize) -> (usize, usize) {
        (index / self.dimension, index % self.dimension)
    }

    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.dimension && col < self.dimension {
            Some(row * self.dimension + col)
        } else {
            None
        }
    }

    /// Adjacent cell in `dir`, or `None` when the move would leave the grid
    ///
    /// West/east moves check the column explicitly: `index - 1` from the first
    /// column is a valid index on the previous row, but not a neighbor.
    pub fn neighbor(&self, index: usize, dir: Direction) -> Option<usize> {
        if index >= self.total_cells() {
            return None;
        }
        let d = self.dimension;
        let col = index % d;
        match dir {
            Direction::South => index.checked_sub(d),
            Direction::North => {
                let n = index + d;
                (n < self.total_cells()).then_some(n)
            }
            Direction::West => (col > 0).then(|| index - 1),
            Direction::East => (col + 1 < d).then(|| index + 1),
        }
    }

    /// Knock down the wall on `dir` side of `index` and the matching wall of its neighbor
    ///
    /// A boundary wall has no neighbor side and only the cell's own flag is cleared.
    /// Removing an absent wall is a no-op.
    pub fn remove_wall(&mut self, index: usize, dir: Direction) -> Result<(), LevelError> {
        self.check(index)?;
        self.cells[index].walls.remove(dir.wall());
        if let Some(other) = self.neighbor(index, dir) {
            self.cells[other].walls.remove(dir.opposite().wall());
        }
        Ok(())
    }

    pub fn has_wall(&self, index: usize, dir: Direction) -> bool {
        self.cells.get(index).is_some_and(|c| c.has_wall(dir))
    }

    pub fn is_visited(&self, index: usize) -> bool {
        self.cells.get(index).is_some_and(|c| c.visited)
    }

    pub fn is_filled(&self, index: usize) -> bool {
        self.cells.get(index).is_some_and(|c| c.filled)
    }

    pub fn is_exit(&self, index: usize) -> bool {
        self.cells.get(index).is_some_and(|c| c.is_exit)
    }

    pub(crate) fn mark_visited(&mut self, index: usize) {
        self.cells[index].visited = true;
    }

    pub(crate) fn mark_filled(&mut self, index: usize) {
        self.cells[index].filled = true;
    }

    pub(crate) fn mark_exit(&mut self, index: usize) {
        self.cells[index].is_exit = true;
    }

    /// Number of cells not yet occupied
    pub fn free_cells(&self) -> usize {
        self.cells.iter().filter(|c| !c.filled).count()
    }

    /// True if the cell already has an open passage to another cell
    pub fn has_open_passage(&self, index: usize) -> bool {
        Direction::ALL
            .iter()
            .any(|&dir| self.open_neighbor(index, dir).is_some())
    }

    /// Neighbor in `dir` if the wall between them is down
    pub fn open_neighbor(&self, index: usize, dir: Direction) -> Option<usize> {
        let other = self.neighbor(index, dir)?;
        (!self.has_wall(index, dir)).then_some(other)
    }

    /// Count of removed walls between two cells (boundary openings excluded)
    ///
    /// Only east and north sides are inspected so each shared wall counts once.
    pub fn removed_interior_walls(&self) -> usize {
        (0..self.total_cells())
            .map(|i| {
                [Direction::East, Direction::North]
                    .iter()
                    .filter(|&&dir| self.open_neighbor(i, dir).is_some())
                    .count()
            })
            .sum()
    }

    /// Number of cells reachable from `start` through open walls
    pub fn reachable_from(&self, start: usize) -> usize {
        if start >= self.total_cells() {
            return 0;
        }
        let mut seen = vec![false; self.total_cells()];
        let mut queue = VecDeque::from([start]);
        seen[start] = true;
        let mut count = 0;
        while let Some(i) = queue.pop_front() {
            count += 1;
            for dir in Direction::ALL {
                if let Some(n) = self.open_neighbor(i, dir)
                    && !seen[n]
                {
                    seen[n] = true;
                    queue.push_back(n);
                }
            }
        }
        count
    }

    /// True if every pair of adjacent cells agrees on their shared wall
    pub fn walls_consistent(&self) -> bool {
        (0..self.total_cells()).all(|i| {
            Direction::ALL.iter().all(|&dir| match self.neighbor(i, dir) {
                Some(n) => self.has_wall(i, dir) == self.has_wall(n, dir.opposite()),
                None => true,
            })
        })
    }

    fn check(&self, index: usize) -> Result<(), LevelError> {
        if index < self.total_cells() {
            Ok(())
        } else {
            Err(LevelError::CellOutOfRange {
                cell: index,
                total: self.total_cells(),
            })
        }
    }
}
