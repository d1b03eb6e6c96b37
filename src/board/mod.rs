//! Board representation and game-state types.
//!
//! Contains the hex directions, the cell bitset, the precomputed board
//! topology, the standard layout generator, and the per-turn state.

pub mod cellset;
pub mod direction;
pub mod layout;
pub mod state;
pub mod topology;

pub use cellset::CellSet;
pub use direction::{Direction, ALL_DIRECTIONS, DIRECTION_COUNT};
pub use layout::{standard_records, Cube, BOARD_RADIUS};
pub use state::{Player, Tree, TreeSize, TurnState, ME, OPPONENT};
pub use topology::{
    Board, BoardError, Cell, CellIndex, CellRecord, CELL_COUNT, MAX_RING, SIGHT_RANGE,
};
