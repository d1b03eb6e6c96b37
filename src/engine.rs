//! Engine state management.
//!
//! Holds the board, built once from the start of the input, and the most
//! recent turn. `run` drives a whole session: read and echo the board, then
//! read and echo turns until the input ends.

use std::io::{self, BufRead, Write};

use tracing::{debug, trace, warn, Level};

use crate::board::state::TurnState;
use crate::board::topology::Board;
use crate::protocol::field::{encode_field, parse_field, FieldError};
use crate::protocol::reader::LineReader;
use crate::protocol::snapshot::topology_json;
use crate::protocol::turn::{encode_turn, try_parse_turn, TurnError};

/// Errors that end a session.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid board description: {0}")]
    Field(#[from] FieldError),

    #[error("invalid turn {turn}: {source}")]
    Turn { turn: usize, source: TurnError },

    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

/// What a finished session processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub turns: usize,
}

/// Holds the board and the latest turn between reads.
pub struct Engine {
    board: Board,
    turn: Option<TurnState>,
    turns_read: usize,
}

impl Engine {
    pub fn new(board: Board) -> Self {
        if tracing::enabled!(Level::TRACE) {
            match topology_json(&board) {
                Ok(json) => trace!(topology = %json, "derived topology"),
                Err(e) => warn!(error = %e, "could not render topology snapshot"),
            }
        }
        Engine {
            board,
            turn: None,
            turns_read: 0,
        }
    }

    /// Reads the board description and builds the engine around it.
    pub fn from_reader<R: BufRead>(reader: &mut LineReader<R>) -> Result<Self, FieldError> {
        let board = parse_field(reader)?;
        debug!(cells = board.len(), lines = reader.line_number(), "board read");
        Ok(Engine::new(board))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The most recently read turn.
    #[inline]
    pub fn turn(&self) -> Option<&TurnState> {
        self.turn.as_ref()
    }

    #[inline]
    pub fn turns_read(&self) -> usize {
        self.turns_read
    }

    /// Reads the next turn. Returns false at a clean end of input.
    pub fn next_turn<R: BufRead>(&mut self, reader: &mut LineReader<R>) -> Result<bool, TurnError> {
        let Some(state) = try_parse_turn(reader)? else {
            return Ok(false);
        };

        for tree in state.trees_off_board(&self.board) {
            warn!(cell = tree.index, day = state.day, "tree on a cell outside the board");
        }
        debug!(
            day = state.day,
            nutrients = state.nutrients,
            trees = state.trees.len(),
            opponent_waiting = state.opponent().is_waiting,
            "turn read"
        );

        self.turn = Some(state);
        self.turns_read += 1;
        Ok(true)
    }

    /// Writes the board in the input format.
    pub fn handle_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", encode_field(&self.board))?;
        out.flush()
    }

    /// Writes the latest turn, if any.
    pub fn handle_turn<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Some(state) = &self.turn {
            writeln!(out, "{}", encode_turn(state))?;
            out.flush()?;
        }
        Ok(())
    }
}

/// Runs a full session over `input`, writing everything read back to `out`.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<Summary, EngineError> {
    let mut reader = LineReader::new(input);
    let mut engine = Engine::from_reader(&mut reader)?;
    engine.handle_board(out)?;

    loop {
        let turn = engine.turns_read() + 1;
        match engine.next_turn(&mut reader) {
            Ok(true) => engine.handle_turn(out)?,
            Ok(false) => break,
            Err(source) => return Err(EngineError::Turn { turn, source }),
        }
    }

    Ok(Summary {
        turns: engine.turns_read(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: &str = include_str!("../tests/fixtures/field.txt");
    const GAME: &str = include_str!("../tests/fixtures/game.txt");

    fn run_str(input: &str) -> (Result<Summary, EngineError>, String) {
        let mut out = Vec::new();
        let result = run(input.as_bytes(), &mut out);
        (result, String::from_utf8(out).expect("output is utf-8"))
    }

    #[test]
    fn board_only_session() {
        let (result, out) = run_str(FIELD);
        assert_eq!(result.unwrap(), Summary { turns: 0 });
        assert_eq!(out, FIELD);
    }

    #[test]
    fn board_then_turn() {
        let input = format!("{}{}", FIELD, GAME);
        let (result, out) = run_str(&input);
        assert_eq!(result.unwrap(), Summary { turns: 1 });

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 38 + 9);
        assert_eq!(lines[0], "37");
        assert_eq!(lines[38], "0");
        assert_eq!(lines[41], "19 2 1");
        assert_eq!(lines[46], "32 1 0 0");
    }

    #[test]
    fn engine_keeps_latest_turn() {
        let input = format!("{}{}{}", FIELD, GAME, GAME.replacen("0\n20\n", "1\n19\n", 1));
        let mut reader = LineReader::new(input.as_bytes());
        let mut engine = Engine::from_reader(&mut reader).unwrap();
        assert!(engine.turn().is_none());

        assert!(engine.next_turn(&mut reader).unwrap());
        assert!(engine.next_turn(&mut reader).unwrap());
        assert!(!engine.next_turn(&mut reader).unwrap());

        let turn = engine.turn().unwrap();
        assert_eq!(turn.day, 1);
        assert_eq!(turn.nutrients, 19);
        assert_eq!(engine.turns_read(), 2);
        assert_eq!(engine.board().len(), 37);
    }

    #[test]
    fn bad_board_fails_before_any_output() {
        let (result, out) = run_str("36\n");
        assert!(matches!(result, Err(EngineError::Field(FieldError::CellCount { .. }))));
        assert!(out.is_empty());
    }

    #[test]
    fn truncated_turn_reports_its_number() {
        let input = format!("{}{}0\n20\n", FIELD, GAME);
        let (result, out) = run_str(&input);
        let err = result.unwrap_err();
        assert!(matches!(err, EngineError::Turn { turn: 2, .. }));
        assert!(err.to_string().starts_with("invalid turn 2: "));
        // Board and first turn were already written.
        assert_eq!(out.lines().count(), 38 + 9);
    }

    #[test]
    fn off_board_trees_do_not_abort() {
        let game = "0\n20\n18 1\n19 2 0\n1\n40 1 1 0\n0\n";
        let (result, out) = run_str(&format!("{}{}", FIELD, game));
        assert_eq!(result.unwrap(), Summary { turns: 1 });
        assert!(out.ends_with("40 1 1 0\n"));
    }
}
