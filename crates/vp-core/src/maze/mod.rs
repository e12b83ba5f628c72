//! Maze generation
//!
//! Contains the cell grid, the carving walk, corner exits, entity population
//! and the level that ties them together.

mod builder;
mod cell;
mod exits;
mod geometry;
mod grid;
mod level;
mod population;

pub use builder::{build_maze, MazeStats};
pub use cell::{Cell, Direction, Walls};
pub use exits::{Corner, ExitOpener};
pub use geometry::{Axis, Point3, WallGeometry, WallSegment};
pub use grid::Grid;
pub use level::{setup_level, CellView, CornerView, Level, LevelEvent, LevelSnapshot};
pub use population::{
    populate, EntityKind, Placement, PlacementCount, Population, PopulationCounts,
};
