//! Perfect maze construction
//!
//! Randomized depth-first walk (recursive backtracker) over the cell grid.
//! The walk starts from the center cell with all four of its walls already
//! knocked down, so the spawn point is always a 4-way junction.

use log::debug;

use super::cell::Direction;
use super::grid::Grid;
use crate::rng::GameRng;
use crate::world::errors::LevelError;

/// Summary of one maze construction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MazeStats {
    /// Walls between two cells knocked down (center start included)
    pub walls_removed: usize,
    /// Number of backtrack steps taken
    pub backtracks: usize,
    /// Deepest the backtrack stack got
    pub max_depth: usize,
}

/// Turn a freshly created grid into a perfect maze
///
/// On success every cell is visited and the open walls form a spanning tree:
/// exactly `total_cells - 1` interior walls are removed.
pub fn build_maze(grid: &mut Grid, rng: &mut GameRng) -> Result<MazeStats, LevelError> {
    let total = grid.total_cells();
    let center = grid.center();
    let mut stats = MazeStats::default();

    // Open the center on all sides. Its neighbors stay unvisited but are
    // already attached to the tree through the center.
    for dir in Direction::ALL {
        if grid.neighbor(center, dir).is_some() && grid.has_wall(center, dir) {
            stats.walls_removed += 1;
        }
        grid.remove_wall(center, dir)?;
    }
    grid.mark_visited(center);

    let mut visited = 1;
    let mut current = center;
    let mut stack: Vec<usize> = Vec::with_capacity(total);
    // Each cell is pushed and popped at most once.
    let budget = 2 * total;
    let mut steps = 0;

    while visited < total {
        steps += 1;
        if steps > budget {
            return Err(LevelError::DisconnectedGrid {
                unvisited: total - visited,
            });
        }

        let mut candidates = [(0usize, Direction::South); 4];
        let mut q = 0;
        for dir in Direction::ALL {
            if let Some(next) = enterable(grid, current, dir) {
                candidates[q] = (next, dir);
                q += 1;
            }
        }

        if q == 0 {
            current = stack.pop().ok_or(LevelError::DisconnectedGrid {
                unvisited: total - visited,
            })?;
            stats.backtracks += 1;
            continue;
        }

        let (next, dir) = candidates[rng.rn2(q as u32) as usize];
        if grid.has_wall(current, dir) {
            grid.remove_wall(current, dir)?;
            stats.walls_removed += 1;
        }
        grid.mark_visited(next);
        visited += 1;
        stack.push(current);
        stats.max_depth = stats.max_depth.max(stack.len());
        current = next;
    }

    debug!(
        "built {d}x{d} maze: {} walls removed, {} backtracks, max depth {}",
        stats.walls_removed,
        stats.backtracks,
        stats.max_depth,
        d = grid.dimension(),
    );
    Ok(stats)
}

/// Unvisited neighbor the walk may step into from `from`
///
/// A cell that already has an open passage (the center's neighbors) is only
/// entered through that passage; entering it any other way would close a loop.
fn enterable(grid: &Grid, from: usize, dir: Direction) -> Option<usize> {
    let next = grid.neighbor(from, dir)?;
    if grid.is_visited(next) {
        return None;
    }
    if grid.has_open_passage(next) && grid.has_wall(from, dir) {
        return None;
    }
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built(dimension: usize, seed: u64) -> (Grid, MazeStats) {
        let mut grid = Grid::new(dimension).unwrap();
        let mut rng = GameRng::new(seed);
        let stats = build_maze(&mut grid, &mut rng).unwrap();
        (grid, stats)
    }

    #[test]
    fn test_level_one_maze() {
        let (grid, stats) = built(5, 42);
        assert_eq!(stats.walls_removed, 24);
        assert_eq!(grid.removed_interior_walls(), 24);
        assert_eq!(grid.reachable_from(0), 25);
        assert!(grid.cells().iter().all(|c| c.visited));
        assert_eq!(grid.cell(12).unwrap().openings(), 4);
    }

    #[test]
    fn test_center_is_junction() {
        for dimension in [3, 5, 7, 9, 21] {
            let (grid, _) = built(dimension, 7);
            let center = grid.center();
            for dir in Direction::ALL {
                assert!(!grid.has_wall(center, dir), "D={dimension} {dir}");
            }
        }
    }

    #[test]
    fn test_single_cell() {
        let (grid, stats) = built(1, 1);
        assert_eq!(stats.walls_removed, 0);
        assert_eq!(grid.cell(0).unwrap().openings(), 4);
        assert!(grid.is_visited(0));
    }

    #[test]
    fn test_even_dimension_still_perfect() {
        for seed in 0..20 {
            let (grid, _) = built(4, seed);
            assert_eq!(grid.removed_interior_walls(), 15);
            assert_eq!(grid.reachable_from(0), 16);
        }
    }

    #[test]
    fn test_same_seed_same_maze() {
        let (a, _) = built(9, 1234);
        let (b, _) = built(9, 1234);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let (a, _) = built(11, 1);
        let (b, _) = built(11, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_stranded_walk_fails_fast() {
        // A visited cell the walk never reached can never be entered, so the
        // stack runs dry with one cell unaccounted for.
        let mut grid = Grid::new(5).unwrap();
        grid.mark_visited(0);
        let mut rng = GameRng::new(42);
        assert_eq!(
            build_maze(&mut grid, &mut rng),
            Err(LevelError::DisconnectedGrid { unvisited: 1 })
        );
    }

    // Shrinking stack: each cell is pushed once and popped once, never
    // revisited through stale history entries.
    #[test]
    fn test_backtracks_bounded() {
        let (grid, stats) = built(15, 99);
        assert!(stats.backtracks < grid.total_cells());
        assert!(stats.max_depth < grid.total_cells());
    }
}
