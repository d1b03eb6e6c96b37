//! The standard 37-cell layout, generated from cube coordinates.
//!
//! Cell 0 is the center; each further ring starts at the cell reached by
//! walking right from the center and spirals counter-clockwise. Richness is
//! 3 for the center and first ring, 2 for the second ring, 1 for the edge.
//! Games normally send this layout on stdin; the generator gives tests and
//! benchmarks a board without a fixture file.

use super::direction::{Direction, ALL_DIRECTIONS};
use super::topology::{CellRecord, CELL_COUNT};

/// Distance from the center cell to the board edge.
pub const BOARD_RADIUS: i8 = 3;

/// Cube hex coordinates (`x + y + z == 0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cube {
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

/// Cube offsets per direction, in column order.
const CUBE_DIRECTIONS: [(i8, i8, i8); 6] = [
    (1, -1, 0),  // right
    (1, 0, -1),  // upper-right
    (0, 1, -1),  // upper-left
    (-1, 1, 0),  // left
    (-1, 0, 1),  // lower-left
    (0, -1, 1),  // lower-right
];

impl Cube {
    pub const CENTER: Cube = Cube { x: 0, y: 0, z: 0 };

    /// The adjacent coordinate in `direction`.
    pub const fn step(self, direction: Direction) -> Cube {
        let (dx, dy, dz) = CUBE_DIRECTIONS[direction as usize];
        Cube {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Hex distance from the center.
    pub fn distance_to_center(self) -> i8 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }
}

/// Coordinates of every cell, indexed by cell index.
pub fn standard_coordinates() -> Vec<Cube> {
    let mut coords = Vec::with_capacity(CELL_COUNT);
    coords.push(Cube::CENTER);
    for radius in 1..=BOARD_RADIUS {
        let mut cube = Cube::CENTER;
        for _ in 0..radius {
            cube = cube.step(Direction::Right);
        }
        for side in 0..6 {
            let turn = ALL_DIRECTIONS[(side + 2) % 6];
            for _ in 0..radius {
                coords.push(cube);
                cube = cube.step(turn);
            }
        }
    }
    coords
}

/// Richness tier for a cell at the given distance from the center.
fn richness_at(distance: i8) -> u8 {
    match distance {
        0 | 1 => 3,
        2 => 2,
        _ => 1,
    }
}

/// Raw records for the standard layout.
pub fn standard_records() -> Vec<CellRecord> {
    let coords = standard_coordinates();
    coords
        .iter()
        .enumerate()
        .map(|(index, &cube)| CellRecord {
            index,
            richness: richness_at(cube.distance_to_center()),
            neighbors: ALL_DIRECTIONS.map(|d| {
                let target = cube.step(d);
                coords.iter().position(|&c| c == target)
            }),
        })
        .collect()
}
