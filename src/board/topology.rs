//! Board topology: direct neighbors, distance rings and sight lines.
//!
//! The board is an arena of 37 cells addressed by index. Every relationship
//! is an index into that arena. Construction runs three full passes over the
//! cells: ring 2 for every cell, then ring 3 for every cell (ring 3 is seeded
//! from the ring 2 sets), then the six sight lines per cell.

use serde::Serialize;
use tracing::debug;

use super::cellset::CellSet;
use super::direction::{Direction, ALL_DIRECTIONS, DIRECTION_COUNT};

/// Index of a cell on the board, in `[0, CELL_COUNT)`.
pub type CellIndex = usize;

/// The number of cells on the board.
pub const CELL_COUNT: usize = 37;

/// Maximum number of cells in a sight line.
pub const SIGHT_RANGE: usize = 3;

/// Outermost precomputed distance ring.
pub const MAX_RING: usize = 3;

/// Errors that abort board construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected {expected} cell records, got {got}")]
    WrongCellCount { expected: usize, got: usize },

    #[error("cell record at position {position} has index {index}")]
    IndexMismatch { position: usize, index: CellIndex },

    #[error("cell {cell} has {direction} neighbor {neighbor}, outside the board")]
    NeighborOutOfRange {
        cell: CellIndex,
        direction: Direction,
        neighbor: CellIndex,
    },

    #[error("cell {cell} lists itself as its {direction} neighbor")]
    SelfNeighbor { cell: CellIndex, direction: Direction },
}

/// One raw cell as read from the board description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRecord {
    pub index: CellIndex,
    pub richness: u8,
    /// Direct neighbor per direction, `None` at the board edge.
    pub neighbors: [Option<CellIndex>; DIRECTION_COUNT],
}

/// A fully derived board cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub index: CellIndex,
    pub richness: u8,
    pub neighbors: [Option<CellIndex>; DIRECTION_COUNT],
    /// Cells exactly two hops away, ascending.
    pub ring2: Vec<CellIndex>,
    /// Cells exactly three hops away, ascending.
    pub ring3: Vec<CellIndex>,
    /// Cells seen walking outward per direction, nearest first.
    pub sight_lines: [Vec<CellIndex>; DIRECTION_COUNT],
}

impl Cell {
    /// Returns the direct neighbor in `direction`, if any.
    #[inline]
    pub fn neighbor(&self, direction: Direction) -> Option<CellIndex> {
        self.neighbors[direction.index()]
    }

    /// Present direct neighbors in direction order.
    pub fn direct_neighbors(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.neighbors.iter().flatten().copied()
    }

    /// Direct neighbors as a set.
    pub fn ring1(&self) -> CellSet {
        self.direct_neighbors().collect()
    }

    /// The sight line in `direction`.
    #[inline]
    pub fn sight_line(&self, direction: Direction) -> &[CellIndex] {
        &self.sight_lines[direction.index()]
    }

    /// Returns the raw record this cell was built from.
    pub fn record(&self) -> CellRecord {
        CellRecord {
            index: self.index,
            richness: self.richness,
            neighbors: self.neighbors,
        }
    }
}

/// The full board with every derived relationship precomputed.
///
/// Immutable once built; reuse it across turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Builds the board from exactly `CELL_COUNT` records in index order.
    pub fn build(records: &[CellRecord]) -> Result<Board, BoardError> {
        validate(records)?;

        let ring1: Vec<CellSet> = records
            .iter()
            .map(|r| r.neighbors.iter().flatten().copied().collect())
            .collect();

        // Ring 2 must be complete for every cell before ring 3 starts.
        let ring2: Vec<CellSet> = (0..CELL_COUNT)
            .map(|i| expand(records, ring1[i], CellSet::single(i) | ring1[i]))
            .collect();
        let ring3: Vec<CellSet> = (0..CELL_COUNT)
            .map(|i| expand(records, ring2[i], CellSet::single(i) | ring1[i] | ring2[i]))
            .collect();

        let cells: Vec<Cell> = records
            .iter()
            .map(|r| Cell {
                index: r.index,
                richness: r.richness,
                neighbors: r.neighbors,
                ring2: ring2[r.index].to_vec(),
                ring3: ring3[r.index].to_vec(),
                sight_lines: ALL_DIRECTIONS.map(|d| walk(records, r.index, d)),
            })
            .collect();

        debug!(
            cells = cells.len(),
            ring1 = ring1.iter().map(CellSet::len).sum::<usize>(),
            ring2 = ring2.iter().map(CellSet::len).sum::<usize>(),
            ring3 = ring3.iter().map(CellSet::len).sum::<usize>(),
            "board topology built"
        );

        Ok(Board { cells })
    }

    /// All cells in index order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell at `index`.
    ///
    /// Panics if `index` is not on the board; use [`Board::get`] for untrusted indices.
    #[inline]
    pub fn cell(&self, index: CellIndex) -> &Cell {
        &self.cells[index]
    }

    #[inline]
    pub fn get(&self, index: CellIndex) -> Option<&Cell> {
        self.cells.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns true if `index` names a cell on this board.
    #[inline]
    pub fn contains(&self, index: CellIndex) -> bool {
        index < self.cells.len()
    }

    /// Direct neighbor of `index` in `direction`.
    pub fn neighbor(&self, index: CellIndex, direction: Direction) -> Option<CellIndex> {
        self.cell(index).neighbor(direction)
    }

    /// The cells exactly `distance` hops from `index`.
    ///
    /// Distance 0 is the cell itself. Distances beyond `MAX_RING` are not
    /// precomputed and yield the empty set.
    pub fn ring(&self, index: CellIndex, distance: usize) -> CellSet {
        let cell = self.cell(index);
        match distance {
            0 => CellSet::single(index),
            1 => cell.ring1(),
            2 => cell.ring2.iter().copied().collect(),
            3 => cell.ring3.iter().copied().collect(),
            _ => CellSet::empty(),
        }
    }

    /// The cell itself plus every ring up to `radius` (capped at `MAX_RING`).
    pub fn cells_within(&self, index: CellIndex, radius: usize) -> CellSet {
        let mut set = CellSet::empty();
        for distance in 0..=radius.min(MAX_RING) {
            set |= self.ring(index, distance);
        }
        set
    }

    /// Hop distance between two cells, or `None` if farther than `MAX_RING`.
    pub fn distance(&self, from: CellIndex, to: CellIndex) -> Option<usize> {
        (0..=MAX_RING).find(|&d| self.ring(from, d).contains(to))
    }

    /// The sight line from `index` in `direction`, nearest first.
    pub fn sight_line(&self, index: CellIndex, direction: Direction) -> &[CellIndex] {
        self.cell(index).sight_line(direction)
    }

    /// The raw records the board was built from.
    pub fn records(&self) -> Vec<CellRecord> {
        self.cells.iter().map(Cell::record).collect()
    }
}

/// Rejects anything that would produce a partial or inconsistent board.
fn validate(records: &[CellRecord]) -> Result<(), BoardError> {
    if records.len() != CELL_COUNT {
        return Err(BoardError::WrongCellCount {
            expected: CELL_COUNT,
            got: records.len(),
        });
    }

    for (position, record) in records.iter().enumerate() {
        if record.index != position {
            return Err(BoardError::IndexMismatch {
                position,
                index: record.index,
            });
        }
        for direction in ALL_DIRECTIONS {
            let Some(neighbor) = record.neighbors[direction.index()] else {
                continue;
            };
            if neighbor >= CELL_COUNT {
                return Err(BoardError::NeighborOutOfRange {
                    cell: record.index,
                    direction,
                    neighbor,
                });
            }
            if neighbor == record.index {
                return Err(BoardError::SelfNeighbor {
                    cell: record.index,
                    direction,
                });
            }
        }
    }

    Ok(())
}

/// One hop outward from `frontier`, skipping anything in `excluded`.
fn expand(records: &[CellRecord], frontier: CellSet, excluded: CellSet) -> CellSet {
    let mut ring = CellSet::empty();
    for from in frontier.iter() {
        for next in records[from].neighbors.iter().flatten().copied() {
            if !excluded.contains(next) {
                ring.insert(next);
            }
        }
    }
    ring
}

/// Follows the neighbor chain from `start` in one direction.
fn walk(records: &[CellRecord], start: CellIndex, direction: Direction) -> Vec<CellIndex> {
    let mut line = Vec::with_capacity(SIGHT_RANGE);
    let mut current = start;
    while line.len() < SIGHT_RANGE {
        match records[current].neighbors[direction.index()] {
            Some(next) => {
                line.push(next);
                current = next;
            }
            None => break,
        }
    }
    line
}
