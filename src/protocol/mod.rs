//! Line-based text protocol.
//!
//! This module reads the board description and per-turn state from an input
//! stream and writes them back in the same layout. The derived topology can
//! additionally be rendered as JSON for diagnostics.

pub mod field;
pub mod reader;
pub mod snapshot;
pub mod turn;

pub use field::{encode_field, parse_field, parse_field_str, FieldError, NO_NEIGHBOR};
pub use reader::{LineReader, ReadError, Record};
pub use snapshot::{cell_json, topology_json};
pub use turn::{encode_turn, parse_turn, parse_turn_str, try_parse_turn, TurnError};
