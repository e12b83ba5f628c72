//! Generation constants

/// Largest maze dimension accepted by default
pub const MAX_DIMENSION: usize = 201;

/// Maze dimension on level 1
pub const BASE_DIMENSION: usize = 5;

/// Dimension added per level; keeps dimensions odd so the center is a cell
pub const DIMENSION_STEP: usize = 2;

/// A key drops once more than a quarter of the hostiles have been killed
pub const KEY_DIVISOR: u32 = 4;

/// Hard upper bound on any configured maximum dimension
pub const DIMENSION_CEILING: usize = 4096;
