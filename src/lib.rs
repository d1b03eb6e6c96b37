//! Sungrove board library.
//!
//! Exposes the board topology builder, the turn-state model, the line-based
//! protocol codecs, and the engine that drives a stdin/stdout session.

pub mod board;
pub mod engine;
pub mod protocol;
