//! Board description codec.
//!
//! Format: a line holding the cell count (always 37), then one line per cell:
//!
//! ```text
//! index richness n0 n1 n2 n3 n4 n5
//! ```
//!
//! `n0..n5` are the direct neighbors in direction order (right, upper-right,
//! upper-left, left, lower-left, lower-right); `-1` marks the board edge.
//! Only the direct-neighbor data is serialized. Rings and sight lines are
//! derived again on every parse.

use std::io::BufRead;

use crate::board::direction::{ALL_DIRECTIONS, DIRECTION_COUNT};
use crate::board::topology::{Board, BoardError, CellIndex, CellRecord, CELL_COUNT};

use super::reader::{LineReader, ReadError, Record};

/// Sentinel for "no neighbor in this direction".
pub const NO_NEIGHBOR: i32 = -1;

const FIELDS_PER_CELL: usize = 2 + DIRECTION_COUNT;

/// Errors that can occur while reading a board description.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error("board must have {expected} cells, header says {got}")]
    CellCount { expected: usize, got: usize },

    #[error("line {line}: invalid neighbor reference {value}")]
    InvalidNeighbor { line: usize, value: i32 },

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Parses one cell line.
fn parse_cell(record: &Record) -> Result<CellRecord, FieldError> {
    let index: CellIndex = record.field(0, "cell index")?;
    let richness: u8 = record.field(1, "richness")?;

    let mut neighbors = [None; DIRECTION_COUNT];
    for direction in ALL_DIRECTIONS {
        let value: i32 = record.field(2 + direction.index(), "neighbor index")?;
        neighbors[direction.index()] = match value {
            NO_NEIGHBOR => None,
            v if v >= 0 => Some(v as CellIndex),
            v => {
                return Err(FieldError::InvalidNeighbor {
                    line: record.line(),
                    value: v,
                })
            }
        };
    }

    Ok(CellRecord {
        index,
        richness,
        neighbors,
    })
}

/// Reads a board description from `reader` and builds the board.
pub fn parse_field<R: BufRead>(reader: &mut LineReader<R>) -> Result<Board, FieldError> {
    let header = reader.next_record("cell count", 1)?;
    let count: usize = header.field(0, "cell count")?;
    if count != CELL_COUNT {
        return Err(FieldError::CellCount {
            expected: CELL_COUNT,
            got: count,
        });
    }

    let mut records = Vec::with_capacity(CELL_COUNT);
    for _ in 0..count {
        let record = reader.next_record("cell record", FIELDS_PER_CELL)?;
        records.push(parse_cell(&record)?);
    }

    Ok(Board::build(&records)?)
}

/// Parses a complete board description held in a string.
pub fn parse_field_str(s: &str) -> Result<Board, FieldError> {
    parse_field(&mut LineReader::new(s.as_bytes()))
}

/// Encodes a neighbor slot, writing `-1` for the board edge.
fn encode_neighbor(neighbor: Option<CellIndex>) -> String {
    match neighbor {
        Some(n) => n.to_string(),
        None => NO_NEIGHBOR.to_string(),
    }
}

/// Encodes the board's direct-neighbor data in the input format.
///
/// Lines are joined with `\n`; there is no trailing newline.
pub fn encode_field(board: &Board) -> String {
    let mut lines = Vec::with_capacity(board.len() + 1);
    lines.push(board.len().to_string());

    for cell in board.cells() {
        let neighbors: Vec<String> = cell.neighbors.iter().map(|&n| encode_neighbor(n)).collect();
        lines.push(format!("{} {} {}", cell.index, cell.richness, neighbors.join(" ")));
    }

    lines.join("\n")
}
