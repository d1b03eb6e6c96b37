//! Per-turn state codec.
//!
//! Input format, one item per line:
//!
//! ```text
//! day
//! nutrients
//! sun score                      (me)
//! sun score waiting              (opponent, waiting is 0 or 1)
//! tree_count
//! index size is_mine is_dormant  (tree_count lines)
//! action_count
//! <action>                       (action_count lines, skipped)
//! ```
//!
//! The encoded form is the same up to and including the trees; actions are
//! never stored and so never written back.

use std::io::BufRead;

use crate::board::state::{Player, Tree, TreeSize, TurnState, ME, OPPONENT};
use crate::board::topology::CellIndex;

use super::reader::{LineReader, ReadError, Record};

/// Errors that can occur while reading a turn.
#[derive(Debug, thiserror::Error)]
pub enum TurnError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error("line {line}: tree size must be 0..3, got {tier}")]
    InvalidTreeSize { line: usize, tier: u8 },
}

fn parse_tree(record: &Record) -> Result<Tree, TurnError> {
    let index: CellIndex = record.field(0, "tree cell index")?;
    let tier: u8 = record.field(1, "tree size")?;
    let size = TreeSize::from_tier(tier).ok_or(TurnError::InvalidTreeSize {
        line: record.line(),
        tier,
    })?;

    Ok(Tree {
        index,
        size,
        is_mine: record.flag(2, "tree owner flag")?,
        is_dormant: record.flag(3, "tree dormant flag")?,
    })
}

/// Reads the rest of a turn once its day line is in hand.
fn parse_turn_body<R: BufRead>(
    day_record: Record,
    reader: &mut LineReader<R>,
) -> Result<TurnState, TurnError> {
    let day: u8 = day_record.field(0, "day")?;
    let nutrients: u8 = reader.next_record("nutrients", 1)?.field(0, "nutrients")?;

    let mine = reader.next_record("own sun and score", 2)?;
    let me = Player::me(mine.field(0, "sun")?, mine.field(1, "score")?);

    let theirs = reader.next_record("opponent sun, score and waiting flag", 3)?;
    let opponent = Player::opponent(
        theirs.field(0, "sun")?,
        theirs.field(1, "score")?,
        theirs.flag(2, "waiting flag")?,
    );

    let tree_count: u8 = reader.next_record("tree count", 1)?.field(0, "tree count")?;
    let mut trees = Vec::with_capacity(usize::from(tree_count));
    for _ in 0..tree_count {
        let record = reader.next_record("tree record", 4)?;
        trees.push(parse_tree(&record)?);
    }

    let action_count: u8 = reader
        .next_record("action count", 1)?
        .field(0, "action count")?;
    for _ in 0..action_count {
        reader.next_line("action")?;
    }

    let mut players = [Player::default(); 2];
    players[OPPONENT] = opponent;
    players[ME] = me;

    Ok(TurnState {
        day,
        nutrients,
        players,
        trees,
    })
}

/// Reads one turn; end of input anywhere inside it is an error.
pub fn parse_turn<R: BufRead>(reader: &mut LineReader<R>) -> Result<TurnState, TurnError> {
    let day = reader.next_record("day", 1)?;
    parse_turn_body(day, reader)
}

/// Reads one turn, or returns `None` if the input ends before it starts.
pub fn try_parse_turn<R: BufRead>(
    reader: &mut LineReader<R>,
) -> Result<Option<TurnState>, TurnError> {
    match reader.try_next_record(1)? {
        Some(day) => parse_turn_body(day, reader).map(Some),
        None => Ok(None),
    }
}

/// Parses a single turn held in a string.
pub fn parse_turn_str(s: &str) -> Result<TurnState, TurnError> {
    parse_turn(&mut LineReader::new(s.as_bytes()))
}

/// Encodes a turn. Lines are joined with `\n`; there is no trailing newline.
pub fn encode_turn(state: &TurnState) -> String {
    let me = state.me();
    let opponent = state.opponent();

    let mut lines = Vec::with_capacity(5 + state.trees.len());
    lines.push(state.day.to_string());
    lines.push(state.nutrients.to_string());
    lines.push(format!("{} {}", me.sun, me.score));
    lines.push(format!(
        "{} {} {}",
        opponent.sun,
        opponent.score,
        u8::from(opponent.is_waiting)
    ));

    lines.push(state.trees.len().to_string());
    for tree in &state.trees {
        lines.push(format!(
            "{} {} {} {}",
            tree.index,
            tree.size.tier(),
            u8::from(tree.is_mine),
            u8::from(tree.is_dormant)
        ));
    }

    lines.join("\n")
}
