//! Maze cells and their walls

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Cardinal direction on the maze grid
///
/// Row 0 is the southern edge; rows grow northward, columns grow eastward.
/// The declaration order is the order neighbors are enumerated in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Direction {
    South = 0,
    West = 1,
    East = 2,
    North = 3,
}

impl Direction {
    /// All directions in enumeration order
    pub const ALL: [Direction; 4] = [
        Direction::South,
        Direction::West,
        Direction::East,
        Direction::North,
    ];

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::North => Direction::South,
        }
    }

    /// The wall flag on this side of a cell
    pub const fn wall(self) -> Walls {
        match self {
            Direction::South => Walls::SOUTH,
            Direction::West => Walls::WEST,
            Direction::East => Walls::EAST,
            Direction::North => Walls::NORTH,
        }
    }
}

bitflags! {
    /// Walls still standing around a cell
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Walls: u8 {
        const SOUTH = 0x01;
        const WEST = 0x02;
        const EAST = 0x04;
        const NORTH = 0x08;
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::all()
    }
}

// Manual serde impl for Walls
impl Serialize for Walls {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Walls {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Walls::from_bits_truncate(bits))
    }
}

/// A single maze cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Standing walls
    pub walls: Walls,

    /// Reached by the maze walk (only meaningful during construction)
    pub visited: bool,

    /// Occupied by the start position or a placed entity
    pub filled: bool,

    /// Opened to the outside as a level exit
    pub is_exit: bool,
}

impl Cell {
    /// A closed cell: all four walls up, no flags
    pub const fn closed() -> Self {
        Self {
            walls: Walls::all(),
            visited: false,
            filled: false,
            is_exit: false,
        }
    }

    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls.contains(dir.wall())
    }

    /// Number of open sides
    pub fn openings(&self) -> u32 {
        4 - self.walls.bits().count_ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opposites() {
        for dir in Direction::iter() {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn test_iter_order_matches_all() {
        let iterated: Vec<_> = Direction::iter().collect();
        assert_eq!(iterated, Direction::ALL.to_vec());
    }

    #[test]
    fn test_closed_cell() {
        let cell = Cell::closed();
        assert_eq!(cell, Cell::default());
        for dir in Direction::ALL {
            assert!(cell.has_wall(dir));
        }
        assert_eq!(cell.openings(), 0);
    }

    #[test]
    fn test_walls_serde() {
        let walls = Walls::SOUTH | Walls::NORTH;
        let json = serde_json::to_string(&walls).unwrap();
        assert_eq!(json, "9");
        let back: Walls = serde_json::from_str(&json).unwrap();
        assert_eq!(back, walls);
    }
}
