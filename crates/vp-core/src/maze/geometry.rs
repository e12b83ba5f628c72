//! World-space layout of the maze
//!
//! The maze is centered on the world origin in the x/z plane, with walls
//! of `length` units between cell centers. Only positions are computed here;
//! building meshes and colliders is left to the presentation layer.

use serde::{Deserialize, Serialize};

use super::cell::Direction;
use super::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Which world axis a wall segment runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// South/north walls
    X,
    /// West/east walls
    Z,
}

/// A standing wall piece to instantiate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    pub cell: usize,
    pub side: Direction,
    pub position: Point3,
    pub axis: Axis,
    /// Extent along `axis`
    pub length: f32,
}

/// Wall dimensions and heights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallGeometry {
    pub length: f32,
    pub width: f32,
    pub height: f32,
    /// Height walls are placed at
    pub y_height: f32,
    /// Height entities are spawned at
    pub spawn_height: f32,
}

impl Default for WallGeometry {
    fn default() -> Self {
        Self {
            length: 1.0,
            width: 0.8,
            height: 1.0,
            y_height: 1.0,
            spawn_height: 0.5,
        }
    }
}

impl WallGeometry {
    /// Anchor the wall layout is measured from
    pub fn origin(&self, dimension: usize) -> Point3 {
        let half = dimension as f32 * self.length / 2.0;
        Point3::new(
            -half + self.length / 2.0,
            self.y_height,
            -half + self.length,
        )
    }

    /// Center of a cell at spawn height
    pub fn cell_center(&self, dimension: usize, index: usize) -> Point3 {
        let origin = self.origin(dimension);
        let (row, col) = (index / dimension, index % dimension);
        Point3::new(
            origin.x + col as f32 * self.length,
            self.spawn_height,
            origin.z + row as f32 * self.length - self.length / 2.0,
        )
    }

    /// Ground plane scale on x and z (planes are 10 units wide at scale 1)
    pub fn ground_scale(&self, dimension: usize) -> (f32, f32) {
        let side = dimension as f32 * self.length / 10.0;
        (side, side)
    }

    fn wall_position(&self, dimension: usize, index: usize, side: Direction) -> Point3 {
        let origin = self.origin(dimension);
        let (row, col) = ((index / dimension) as f32, (index % dimension) as f32);
        let l = self.length;
        let (x, z) = (origin.x + col * l, origin.z + row * l);
        match side {
            Direction::West => Point3::new(x - l / 2.0, self.y_height, z - l / 2.0),
            Direction::East => Point3::new(x + l / 2.0, self.y_height, z - l / 2.0),
            Direction::South => Point3::new(x, self.y_height, z - l),
            Direction::North => Point3::new(x, self.y_height, z),
        }
    }

    /// Every wall still standing, each shared wall listed once
    ///
    /// Z-axis walls are a `width` longer so perpendicular ends overlap.
    pub fn wall_segments(&self, grid: &Grid) -> Vec<WallSegment> {
        let d = grid.dimension();
        let mut segments = Vec::new();
        for index in 0..grid.total_cells() {
            let (row, col) = grid.row_col(index);
            let mut sides = vec![Direction::South, Direction::West];
            if col + 1 == d {
                sides.push(Direction::East);
            }
            if row + 1 == d {
                sides.push(Direction::North);
            }
            for side in sides {
                if !grid.has_wall(index, side) {
                    continue;
                }
                let (axis, length) = match side {
                    Direction::West | Direction::East => (Axis::Z, self.length + self.width),
                    Direction::South | Direction::North => (Axis::X, self.length),
                };
                segments.push(WallSegment {
                    cell: index,
                    side,
                    position: self.wall_position(d, index, side),
                    axis,
                    length,
                });
            }
        }
        segments
    }
}
