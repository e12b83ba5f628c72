//! Populating a finished maze with pickups and hostiles
//!
//! Entity counts scale with the cell count so density stays roughly constant
//! from level to level. Cells are picked by rejection sampling against the
//! `filled` flag; the free-cell supply is checked up front so sampling always
//! terminates.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::geometry::{Point3, WallGeometry};
use super::grid::Grid;
use crate::rng::GameRng;
use crate::world::errors::LevelError;

/// Random draws per entity before falling back to picking among the free cells directly
const MAX_REJECTIONS: usize = 100;

/// A `[minimum, maximum)` range an entity count is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementCount {
    pub minimum: u32,
    pub maximum: u32,
}

impl PlacementCount {
    pub const fn new(minimum: u32, maximum: u32) -> Self {
        Self { minimum, maximum }
    }

    /// `[cells / min_divisor, cells / max_divisor)`
    pub fn scaled(total_cells: usize, min_divisor: u32, max_divisor: u32) -> Self {
        let cells = total_cells as u32;
        Self {
            minimum: cells / min_divisor.max(1),
            maximum: cells / max_divisor.max(1),
        }
    }

    /// Draw an actual count; an empty range yields `minimum`
    pub fn draw(&self, rng: &mut GameRng) -> Result<u32, LevelError> {
        if self.minimum > self.maximum {
            return Err(LevelError::InvalidPlacementCount {
                minimum: self.minimum,
                maximum: self.maximum,
            });
        }
        Ok(rng.range(self.minimum, self.maximum))
    }

    /// Whether `n` is a count `draw` can produce
    pub fn admits(&self, n: u32) -> bool {
        if self.maximum <= self.minimum {
            n == self.minimum
        } else {
            (self.minimum..self.maximum).contains(&n)
        }
    }
}

/// Count ranges for both entity categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationCounts {
    pub pickups: PlacementCount,
    pub hostiles: PlacementCount,
}

impl PopulationCounts {
    /// Default scaling: pickups in `[n/10, n/5)`, hostiles in `[n/8, n/3)`
    pub fn for_cells(total_cells: usize) -> Self {
        Self {
            pickups: PlacementCount::scaled(total_cells, 10, 5),
            hostiles: PlacementCount::scaled(total_cells, 8, 3),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum EntityKind {
    /// Fuel pickup
    Pickup,
    /// Enemy
    Hostile,
}

/// One spawned entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub kind: EntityKind,
    pub cell: usize,
    pub position: Point3,
}

/// Everything placed on a level
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Population {
    /// Cell kept clear for the player
    pub start_cell: usize,
    pub placements: Vec<Placement>,
    /// Hostiles spawned; the level is cleared when this many are killed
    pub total_hostiles: u32,
}

impl Population {
    pub fn count(&self, kind: EntityKind) -> usize {
        self.placements.iter().filter(|p| p.kind == kind).count()
    }

    pub fn of_kind(&self, kind: EntityKind) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(move |p| p.kind == kind)
    }

    pub fn at(&self, cell: usize) -> Option<&Placement> {
        self.placements.iter().find(|p| p.cell == cell)
    }
}

/// Reserve the start cell, then place pickups and hostiles in free cells
///
/// Both counts are drawn and checked against the free cells before anything
/// is placed, so a failure leaves the grid's occupancy untouched apart from
/// the start cell.
pub fn populate(
    grid: &mut Grid,
    counts: &PopulationCounts,
    geometry: &WallGeometry,
    rng: &mut GameRng,
) -> Result<Population, LevelError> {
    let start_cell = grid.center();
    grid.mark_filled(start_cell);

    let pickups = counts.pickups.draw(rng)? as usize;
    let hostiles = counts.hostiles.draw(rng)? as usize;
    let available = grid.free_cells();
    if pickups + hostiles > available {
        return Err(LevelError::InsufficientFreeCells {
            requested: pickups + hostiles,
            available,
        });
    }

    let mut population = Population {
        start_cell,
        placements: Vec::with_capacity(pickups + hostiles),
        total_hostiles: 0,
    };
    for (kind, n) in [(EntityKind::Pickup, pickups), (EntityKind::Hostile, hostiles)] {
        for _ in 0..n {
            let cell = pick_free_cell(grid, rng)?;
            grid.mark_filled(cell);
            population.placements.push(Placement {
                kind,
                cell,
                position: geometry.cell_center(grid.dimension(), cell),
            });
            if kind == EntityKind::Hostile {
                population.total_hostiles += 1;
            }
        }
    }

    info!(
        "populated {d}x{d} maze with {pickups} pickups and {hostiles} hostiles",
        d = grid.dimension()
    );
    Ok(population)
}

/// Uniformly random unfilled cell
fn pick_free_cell(grid: &Grid, rng: &mut GameRng) -> Result<usize, LevelError> {
    let total = grid.total_cells();
    for _ in 0..MAX_REJECTIONS {
        let cell = rng.rn2(total as u32) as usize;
        if !grid.is_filled(cell) {
            return Ok(cell);
        }
    }

    // Crowded grid: draw among the free cells instead.
    let free: Vec<usize> = (0..total).filter(|&i| !grid.is_filled(i)).collect();
    debug!("rejection sampling gave up, {} free cells left", free.len());
    rng.choose_index(free.len())
        .map(|i| free[i])
        .ok_or(LevelError::InsufficientFreeCells {
            requested: 1,
            available: 0,
        })
}
