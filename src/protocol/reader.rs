//! Line-oriented input stream.
//!
//! `LineReader` wraps any `BufRead` and hands out one line at a time, keeping
//! a 1-based line counter for error messages. `Record` is a single line split
//! on whitespace with typed accessors for its fields.

use std::io::BufRead;
use std::str::FromStr;

/// Errors raised while reading or tokenizing input lines.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("line {line}: expected {expected} fields, got {got}")]
    FieldCount {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("line {line}: invalid {expected} '{token}'")]
    InvalidToken {
        line: usize,
        expected: &'static str,
        token: String,
    },
}

/// A reader that yields input one line at a time.
pub struct LineReader<R> {
    inner: R,
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        LineReader { inner, line: 0 }
    }

    /// Number of lines consumed so far.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// Reads the next line, or `None` at end of input.
    ///
    /// The trailing newline (and carriage return) is stripped.
    pub fn try_next_line(&mut self) -> Result<Option<String>, ReadError> {
        let mut buf = String::new();
        if self.inner.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }

    /// Reads the next line; end of input is an error naming `expected`.
    pub fn next_line(&mut self, expected: &'static str) -> Result<String, ReadError> {
        self.try_next_line()?
            .ok_or(ReadError::UnexpectedEof { expected })
    }

    /// Reads the next line as a record of exactly `fields` tokens.
    pub fn next_record(
        &mut self,
        expected: &'static str,
        fields: usize,
    ) -> Result<Record, ReadError> {
        let text = self.next_line(expected)?;
        Record::parse(self.line, &text, fields)
    }

    /// Like `next_record`, but returns `None` at a clean end of input.
    pub fn try_next_record(&mut self, fields: usize) -> Result<Option<Record>, ReadError> {
        match self.try_next_line()? {
            Some(text) => Record::parse(self.line, &text, fields).map(Some),
            None => Ok(None),
        }
    }
}

/// One whitespace-separated input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    line: usize,
    tokens: Vec<String>,
}

impl Record {
    /// Splits `text` and checks it has exactly `fields` tokens.
    pub fn parse(line: usize, text: &str, fields: usize) -> Result<Record, ReadError> {
        let tokens: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        if tokens.len() != fields {
            return Err(ReadError::FieldCount {
                line,
                expected: fields,
                got: tokens.len(),
            });
        }
        Ok(Record { line, tokens })
    }

    /// Line number this record was read from.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Parses field `i` as `T`; `expected` names the field in errors.
    pub fn field<T: FromStr>(&self, i: usize, expected: &'static str) -> Result<T, ReadError> {
        let token = &self.tokens[i];
        token.parse().map_err(|_| self.invalid(i, expected))
    }

    /// Parses field `i` as a `0`/`1` flag.
    pub fn flag(&self, i: usize, expected: &'static str) -> Result<bool, ReadError> {
        match self.tokens[i].as_str() {
            "0" => Ok(false),
            "1" => Ok(true),
            _ => Err(self.invalid(i, expected)),
        }
    }

    /// Builds an `InvalidToken` error for field `i`.
    pub fn invalid(&self, i: usize, expected: &'static str) -> ReadError {
        ReadError::InvalidToken {
            line: self.line,
            expected,
            token: self.tokens[i].clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_counted_and_stripped() {
        let mut reader = LineReader::new("a b\r\nc\n\nd".as_bytes());
        assert_eq!(reader.next_line("first").unwrap(), "a b");
        assert_eq!(reader.next_line("second").unwrap(), "c");
        assert_eq!(reader.next_line("third").unwrap(), "");
        assert_eq!(reader.next_line("fourth").unwrap(), "d");
        assert_eq!(reader.line_number(), 4);
        assert!(reader.try_next_line().unwrap().is_none());
    }

    #[test]
    fn eof_names_what_was_expected() {
        let mut reader = LineReader::new("".as_bytes());
        let err = reader.next_line("cell count").unwrap_err();
        assert!(matches!(err, ReadError::UnexpectedEof { expected: "cell count" }));
        assert_eq!(err.to_string(), "unexpected end of input, expected cell count");
    }

    #[test]
    fn record_field_count_is_exact() {
        let mut reader = LineReader::new("1 2 3\n1 2\n".as_bytes());
        let record = reader.next_record("triple", 3).unwrap();
        assert_eq!(record.line(), 1);
        assert_eq!(record.field::<u8>(2, "third").unwrap(), 3);

        let err = reader.next_record("triple", 3).unwrap_err();
        assert!(matches!(err, ReadError::FieldCount { line: 2, expected: 3, got: 2 }));
    }

    #[test]
    fn try_next_record_stops_cleanly() {
        let mut reader = LineReader::new("7\n".as_bytes());
        assert!(reader.try_next_record(1).unwrap().is_some());
        assert!(reader.try_next_record(1).unwrap().is_none());
    }

    #[test]
    fn typed_fields() {
        let record = Record::parse(5, "12 -1 x 1 0 2", 6).unwrap();
        assert_eq!(record.field::<usize>(0, "index").unwrap(), 12);
        assert_eq!(record.field::<i32>(1, "neighbor").unwrap(), -1);
        assert!(record.field::<u8>(1, "richness").is_err());

        let err = record.field::<u8>(2, "richness").unwrap_err();
        assert_eq!(err.to_string(), "line 5: invalid richness 'x'");

        assert!(record.flag(3, "flag").unwrap());
        assert!(!record.flag(4, "flag").unwrap());
        assert!(record.flag(5, "flag").is_err());
    }
}
