//! JSON snapshot of the derived board topology.
//!
//! The line format only carries direct neighbors. For diagnostics the engine
//! can dump everything it derived: rings per distance and sight lines keyed
//! by direction name.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::board::cellset::CellSet;
use crate::board::direction::ALL_DIRECTIONS;
use crate::board::topology::{Board, Cell, CellIndex};

#[derive(Serialize)]
struct CellTopology<'a> {
    index: CellIndex,
    richness: u8,
    ring1: CellSet,
    ring2: &'a [CellIndex],
    ring3: &'a [CellIndex],
    sight_lines: BTreeMap<&'static str, &'a [CellIndex]>,
}

impl<'a> From<&'a Cell> for CellTopology<'a> {
    fn from(cell: &'a Cell) -> Self {
        CellTopology {
            index: cell.index,
            richness: cell.richness,
            ring1: cell.ring1(),
            ring2: &cell.ring2,
            ring3: &cell.ring3,
            sight_lines: ALL_DIRECTIONS
                .iter()
                .map(|&d| (d.name(), cell.sight_line(d)))
                .collect(),
        }
    }
}

/// Renders one cell's derived topology as a single-line JSON object.
pub fn cell_json(cell: &Cell) -> serde_json::Result<String> {
    serde_json::to_string(&CellTopology::from(cell))
}

/// Renders the whole board's derived topology as a JSON array.
pub fn topology_json(board: &Board) -> serde_json::Result<String> {
    let cells: Vec<CellTopology> = board.cells().iter().map(CellTopology::from).collect();
    serde_json::to_string(&cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::layout::standard_records;

    #[test]
    fn cell_snapshot_fields() {
        let board = Board::build(&standard_records()).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&cell_json(board.cell(32)).unwrap()).unwrap();

        assert_eq!(value["index"], 32);
        assert_eq!(value["richness"], 1);
        assert_eq!(value["ring1"], serde_json::json!([15, 16, 31, 33]));
        assert_eq!(value["ring2"], serde_json::json!([5, 6, 14, 17, 30, 34]));
        assert_eq!(value["sight_lines"]["upper-left"], serde_json::json!([15, 14, 13]));
        assert_eq!(value["sight_lines"]["lower-left"], serde_json::json!([]));
    }

    #[test]
    fn board_snapshot_lists_every_cell() {
        let board = Board::build(&standard_records()).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&topology_json(&board).unwrap()).unwrap();
        let cells = value.as_array().expect("snapshot is an array");
        assert_eq!(cells.len(), 37);
        assert_eq!(cells[28]["ring3"], serde_json::json!([0, 3, 5, 11, 15, 25, 31]));
    }
}
