//! # Character Sources
//!
//! The tokenizer never sees a `&str` directly. It pulls characters one at a
//! time from a [`CharSource`], which must also support a single **mark** that
//! can be rolled back to. That is all the look-ahead the tokenizer needs: it
//! marks, reads as many characters as the candidate literal is long, and
//! resets if they don't match.
//!
//! Two implementations are provided:
//!
//! - [`StrSource`] - over an in-memory string, can never fail
//! - [`CharStream`] - over any [`BufRead`], decoding UTF-8 as it goes

use std::collections::VecDeque;
use std::convert::Infallible;
use std::io::{self, BufRead, BufReader, Read};

use crate::error::ParseError;

/// A sequential character reader with mark/rollback.
pub trait CharSource {
    /// Error raised when the underlying input cannot be read.
    type Error;

    /// Reads the next character, or `None` at end of input.
    fn next_char(&mut self) -> Result<Option<char>, Self::Error>;

    /// Remembers the current position. Replaces any earlier mark.
    fn mark(&mut self);

    /// Rolls back to the most recent mark (start of input if never marked).
    fn reset(&mut self);

    /// Number of characters consumed so far.
    fn position(&self) -> usize;
}

/// A [`CharSource`] over a string slice.
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    s: &'a str,
    /// Byte index of the next character.
    i: usize,
    /// Characters consumed.
    pos: usize,
    /// Saved `(i, pos)`.
    mark: (usize, usize),
}

impl<'a> StrSource<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            s,
            i: 0,
            pos: 0,
            mark: (0, 0),
        }
    }
}

impl CharSource for StrSource<'_> {
    type Error = Infallible;

    fn next_char(&mut self) -> Result<Option<char>, Infallible> {
        let Some(c) = self.s[self.i..].chars().next() else {
            return Ok(None);
        };
        self.i += c.len_utf8();
        self.pos += 1;
        Ok(Some(c))
    }

    fn mark(&mut self) {
        self.mark = (self.i, self.pos);
    }

    fn reset(&mut self) {
        (self.i, self.pos) = self.mark;
    }

    fn position(&self) -> usize {
        self.pos
    }
}

/// A [`CharSource`] decoding UTF-8 from a buffered reader.
///
/// Characters read after a mark are kept in a small look-ahead buffer so a
/// reset can replay them. The buffer is dropped on the next mark, so it only
/// ever holds what was read since then.
pub struct CharStream<R> {
    reader: R,
    lookahead: VecDeque<char>,
    /// Index into `lookahead` of the next character to hand out.
    cursor: usize,
    marked: bool,
    /// Characters committed before `lookahead[0]`.
    consumed: usize,
    /// Bytes pulled from `reader`, for error reporting.
    offset: usize,
}

impl<R: Read> CharStream<BufReader<R>> {
    /// Wraps an unbuffered reader.
    pub fn from_reader(reader: R) -> Self {
        Self::new(BufReader::new(reader))
    }
}

impl<R: BufRead> CharStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            lookahead: VecDeque::new(),
            cursor: 0,
            marked: false,
            consumed: 0,
            offset: 0,
        }
    }

    fn read_byte(&mut self) -> Result<Option<u8>, ParseError> {
        let byte = loop {
            match self.reader.fill_buf() {
                Ok(buf) => break buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(ParseError::Io(e)),
            }
        };
        if byte.is_some() {
            self.reader.consume(1);
            self.offset += 1;
        }
        Ok(byte)
    }

    fn decode(&mut self) -> Result<Option<char>, ParseError> {
        let start = self.offset;
        let Some(first) = self.read_byte()? else {
            return Ok(None);
        };
        let width = utf8_width(first);
        if width == 0 {
            return Err(ParseError::InvalidUtf8 { offset: start });
        }

        let mut bytes = [first, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            *slot = self
                .read_byte()?
                .ok_or(ParseError::InvalidUtf8 { offset: start })?;
        }

        std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .map(Some)
            .ok_or(ParseError::InvalidUtf8 { offset: start })
    }
}

/// Length of a UTF-8 sequence from its leading byte, 0 if it can't lead one.
fn utf8_width(b: u8) -> usize {
    match b {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

impl<R: BufRead> CharSource for CharStream<R> {
    type Error = ParseError;

    fn next_char(&mut self) -> Result<Option<char>, ParseError> {
        if let Some(&c) = self.lookahead.get(self.cursor) {
            self.cursor += 1;
            return Ok(Some(c));
        }

        let Some(c) = self.decode()? else {
            return Ok(None);
        };
        if self.marked {
            self.lookahead.push_back(c);
            self.cursor += 1;
        } else {
            self.consumed += 1;
        }
        Ok(Some(c))
    }

    fn mark(&mut self) {
        self.consumed += self.cursor;
        self.lookahead.drain(..self.cursor);
        self.cursor = 0;
        self.marked = true;
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }

    fn position(&self) -> usize {
        self.consumed + self.cursor
    }
}
