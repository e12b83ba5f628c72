//! ASCII rendering of a level
//!
//! The maze is drawn north-up on a `(2D + 1) x (2D + 1)` character lattice:
//! cells sit on odd coordinates, walls between them on the even ones.

use crossterm::style::Stylize;
use vp_core::maze::{Direction, EntityKind, Level};

/// What occupies a cell on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Start,
    Pickup,
    Hostile,
    Exit,
    Floor,
}

impl Glyph {
    pub fn symbol(self) -> char {
        match self {
            Glyph::Start => '@',
            Glyph::Pickup => '*',
            Glyph::Hostile => 'V',
            Glyph::Exit => 'O',
            Glyph::Floor => ' ',
        }
    }

    fn styled(self) -> String {
        let c = self.symbol();
        match self {
            Glyph::Start => c.bold().yellow().to_string(),
            Glyph::Pickup => c.green().to_string(),
            Glyph::Hostile => c.red().to_string(),
            Glyph::Exit => c.cyan().to_string(),
            Glyph::Floor => c.to_string(),
        }
    }
}

/// Glyph for cell `index`; entities win over the exit marker
pub fn glyph_at(level: &Level, index: usize) -> Glyph {
    let population = level.population();
    if index == population.start_cell {
        return Glyph::Start;
    }
    match population.at(index).map(|p| p.kind) {
        Some(EntityKind::Pickup) => Glyph::Pickup,
        Some(EntityKind::Hostile) => Glyph::Hostile,
        None if level.grid().is_exit(index) => Glyph::Exit,
        None => Glyph::Floor,
    }
}

enum Tile {
    Post,
    HWall,
    VWall,
    Open,
    Cell(Glyph),
}

fn lattice(level: &Level) -> Vec<Vec<Tile>> {
    let grid = level.grid();
    let d = grid.dimension();
    let size = 2 * d + 1;
    let mut tiles: Vec<Vec<Tile>> = (0..size)
        .map(|y| {
            (0..size)
                .map(|x| match (y % 2, x % 2) {
                    (0, 0) => Tile::Post,
                    _ => Tile::Open,
                })
                .collect()
        })
        .collect();

    for index in 0..grid.total_cells() {
        let (row, col) = grid.row_col(index);
        // Screen row of this cell; grid row 0 is the bottom line.
        let y = 2 * (d - 1 - row) + 1;
        let x = 2 * col + 1;
        tiles[y][x] = Tile::Cell(glyph_at(level, index));
        if grid.has_wall(index, Direction::North) {
            tiles[y - 1][x] = Tile::HWall;
        }
        if grid.has_wall(index, Direction::South) {
            tiles[y + 1][x] = Tile::HWall;
        }
        if grid.has_wall(index, Direction::West) {
            tiles[y][x - 1] = Tile::VWall;
        }
        if grid.has_wall(index, Direction::East) {
            tiles[y][x + 1] = Tile::VWall;
        }
    }
    tiles
}

/// Draw the maze, optionally with ANSI colors
pub fn render(level: &Level, color: bool) -> String {
    lattice(level)
        .iter()
        .map(|line| {
            line.iter()
                .map(|tile| match tile {
                    Tile::Post => "+".to_string(),
                    Tile::HWall => "-".to_string(),
                    Tile::VWall => "|".to_string(),
                    Tile::Open => " ".to_string(),
                    Tile::Cell(glyph) if color => glyph.styled(),
                    Tile::Cell(glyph) => glyph.symbol().to_string(),
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line count of what was placed
pub fn summary(level: &Level) -> String {
    let population = level.population();
    format!(
        "{d}x{d} maze, seed {seed}: {fuel} fuel, {hostiles} VamPyros",
        d = level.dimension(),
        seed = level.seed(),
        fuel = population.count(EntityKind::Pickup),
        hostiles = population.count(EntityKind::Hostile),
    )
}

/// `(row, col)` of every entity of `kind`, in placement order
pub fn roster(level: &Level, kind: EntityKind) -> String {
    let d = level.dimension();
    level
        .population()
        .of_kind(kind)
        .map(|p| format!("({}, {})", p.cell / d, p.cell % d))
        .collect::<Vec<_>>()
        .join(" ")
}
