//! A generated level: maze, exits and population
//!
//! Built in one pass by [`Level::setup`]. Afterwards the only mutation is
//! opening corners, which takes `&mut self`, so corner opening can never be
//! re-entered while another caller holds the level.

use std::mem;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::builder::{build_maze, MazeStats};
use super::cell::Walls;
use super::exits::{Corner, ExitOpener};
use super::geometry::{WallGeometry, WallSegment};
use super::grid::Grid;
use super::population::{populate, Placement, Population};
use crate::rng::GameRng;
use crate::world::errors::LevelError;
use crate::world::options::GenerationOptions;

/// Notification for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelEvent {
    ExitOpened(Corner),
}

/// One level's state
///
/// Serializes everything but the construction stats and pending events; the
/// RNG keeps its stream position, so corners opened after a restore match
/// the ones the saved level would have opened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    number: u32,
    grid: Grid,
    exits: ExitOpener,
    population: Population,
    geometry: WallGeometry,
    rng: GameRng,
    #[serde(skip)]
    stats: MazeStats,
    #[serde(skip)]
    events: Vec<LevelEvent>,
}

/// Generate level `number` with default options
pub fn setup_level(number: u32, rng: GameRng) -> Result<Level, LevelError> {
    Level::setup(number, &GenerationOptions::default(), rng)
}

impl Level {
    /// Build, arm and populate a level
    ///
    /// Any error aborts the whole setup; no partially built level is returned.
    pub fn setup(
        number: u32,
        options: &GenerationOptions,
        mut rng: GameRng,
    ) -> Result<Self, LevelError> {
        let dimension = options.dimension_for_level(number)?;
        let mut grid = Grid::with_limit(dimension, options.max_dimension)?;
        let stats = build_maze(&mut grid, &mut rng)?;
        let exits = ExitOpener::new();
        let counts = options.population_counts(grid.total_cells());
        let population = populate(&mut grid, &counts, &options.geometry, &mut rng)?;

        info!(
            "level {number}: {dimension}x{dimension} maze, seed {}, {} hostiles",
            rng.seed(),
            population.total_hostiles
        );
        Ok(Self {
            number,
            grid,
            exits,
            population,
            geometry: options.geometry,
            rng,
            stats,
            events: Vec::new(),
        })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn dimension(&self) -> usize {
        self.grid.dimension()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn exits(&self) -> &ExitOpener {
        &self.exits
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn total_hostiles(&self) -> u32 {
        self.population.total_hostiles
    }

    pub fn stats(&self) -> MazeStats {
        self.stats
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// True once at least one corner is open
    pub fn has_open_exit(&self) -> bool {
        self.exits.remaining().len() < Corner::ALL.len()
    }

    /// Open a random closed corner and queue an [`LevelEvent::ExitOpened`]
    pub fn open_random_corner(&mut self) -> Result<Corner, LevelError> {
        match self.exits.open_random_corner(&mut self.grid, &mut self.rng) {
            Ok(corner) => {
                self.events.push(LevelEvent::ExitOpened(corner));
                Ok(corner)
            }
            Err(err) => {
                warn!("level {}: {err}", self.number);
                Err(err)
            }
        }
    }

    /// Drain pending notifications
    pub fn take_events(&mut self) -> Vec<LevelEvent> {
        mem::take(&mut self.events)
    }

    pub fn wall_segments(&self) -> Vec<WallSegment> {
        self.geometry.wall_segments(&self.grid)
    }

    /// Everything the presentation layer needs to build the level
    pub fn snapshot(&self) -> LevelSnapshot {
        let d = self.dimension();
        LevelSnapshot {
            level: self.number,
            seed: self.seed(),
            dimension: d,
            cells: self
                .grid
                .cells()
                .iter()
                .enumerate()
                .map(|(index, cell)| CellView {
                    index,
                    row: index / d,
                    col: index % d,
                    walls: cell.walls,
                    filled: cell.filled,
                    is_exit: cell.is_exit,
                })
                .collect(),
            corners: Corner::ALL
                .iter()
                .map(|&corner| CornerView {
                    corner,
                    cell: corner.cell_index(d),
                    open: !self.exits.is_closed(corner),
                })
                .collect(),
            start_cell: self.population.start_cell,
            placements: self.population.placements.clone(),
            total_hostiles: self.population.total_hostiles,
            ground_scale: self.geometry.ground_scale(d),
            walls: self.wall_segments(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellView {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub walls: Walls,
    pub filled: bool,
    pub is_exit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CornerView {
    pub corner: Corner,
    pub cell: usize,
    pub open: bool,
}

/// Serializable view of a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    pub level: u32,
    pub seed: u64,
    pub dimension: usize,
    pub cells: Vec<CellView>,
    pub corners: Vec<CornerView>,
    pub start_cell: usize,
    pub placements: Vec<Placement>,
    pub total_hostiles: u32,
    pub ground_scale: (f32, f32),
    pub walls: Vec<WallSegment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::EntityKind;

    #[test]
    fn test_setup_level_one() {
        let level = setup_level(1, GameRng::new(42)).unwrap();
        assert_eq!(level.dimension(), 5);
        assert_eq!(level.grid().removed_interior_walls(), 24);
        assert_eq!(level.stats().walls_removed, 24);
        assert!(!level.has_open_exit());
        assert_eq!(
            level.total_hostiles() as usize,
            level.population().count(EntityKind::Hostile)
        );
    }

    #[test]
    fn test_setup_rejects_level_zero() {
        assert_eq!(
            setup_level(0, GameRng::new(1)).unwrap_err(),
            LevelError::InvalidLevel(0)
        );
    }

    #[test]
    fn test_setup_rejects_oversized_level() {
        let options = GenerationOptions {
            max_dimension: 9,
            ..GenerationOptions::default()
        };
        assert!(Level::setup(3, &options, GameRng::new(1)).is_ok());
        assert_eq!(
            Level::setup(4, &options, GameRng::new(1)).unwrap_err(),
            LevelError::InvalidDimension {
                dimension: 11,
                max: 9
            }
        );
    }

    #[test]
    fn test_open_corner_queues_event() {
        let mut level = setup_level(2, GameRng::new(9)).unwrap();
        let corner = level.open_random_corner().unwrap();
        assert!(level.has_open_exit());
        assert_eq!(level.take_events(), vec![LevelEvent::ExitOpened(corner)]);
        assert!(level.take_events().is_empty());
    }

    #[test]
    fn test_fifth_open_fails_without_event() {
        let mut level = setup_level(1, GameRng::new(5)).unwrap();
        for _ in 0..4 {
            level.open_random_corner().unwrap();
        }
        assert_eq!(level.take_events().len(), 4);
        assert_eq!(
            level.open_random_corner(),
            Err(LevelError::NoCornersRemaining)
        );
        assert!(level.take_events().is_empty());
    }

    #[test]
    fn test_restored_level_opens_same_corners() {
        let mut level = setup_level(2, GameRng::new(64)).unwrap();
        level.open_random_corner().unwrap();
        let json = serde_json::to_string(&level).unwrap();
        let mut restored: Level = serde_json::from_str(&json).unwrap();

        for _ in 0..3 {
            assert_eq!(
                restored.open_random_corner(),
                level.open_random_corner()
            );
        }
        assert_eq!(restored.grid(), level.grid());
    }

    #[test]
    fn test_snapshot_contents() {
        let mut level = setup_level(1, GameRng::new(77)).unwrap();
        let corner = level.open_random_corner().unwrap();
        let snap = level.snapshot();
        assert_eq!(snap.cells.len(), 25);
        assert_eq!(snap.start_cell, 12);
        assert_eq!(snap.seed, 77);
        let open: Vec<_> = snap.corners.iter().filter(|c| c.open).collect();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].corner, corner);
        assert!(snap.cells[open[0].cell].is_exit);

        let json = serde_json::to_string(&snap).unwrap();
        let back: LevelSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cells, snap.cells);
        assert_eq!(back.placements.len(), snap.placements.len());
    }
}
