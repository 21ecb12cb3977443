//! A backtrackable cursor over GraphQL source text.
//!
//! The grammar is resolved by ordered alternation: a production tries each
//! of its alternatives from the same starting point and commits to the
//! first one that fully succeeds. [`SourceCursor`] supports this with
//! cheap, copyable [`CursorSnapshot`]s: take a snapshot before an attempt
//! and restore it when the attempt fails, so partial consumption by a
//! failing branch never leaks into the next branch.

use crate::SourcePosition;

/// A cursor over `&str` source text with line/column tracking.
///
/// All consumption goes through [`bump`](SourceCursor::bump) (or helpers
/// built on it) so that position bookkeeping stays correct, including
/// `\r\n` counting as a single line terminator.
#[derive(Debug)]
pub struct SourceCursor<'src> {
    /// The full source text being parsed.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    byte_offset: usize,

    /// Current 0-based line number.
    line: usize,

    /// Current 0-based character column.
    column: usize,

    /// Whether the previously consumed character was `\r`, so a following
    /// `\n` does not increment the line number a second time.
    last_char_was_cr: bool,
}

/// A saved cursor state for backtracking.
///
/// Restoring a snapshot rewinds the cursor to exactly the state it had
/// when the snapshot was taken.
#[derive(Clone, Copy, Debug)]
pub struct CursorSnapshot {
    byte_offset: usize,
    line: usize,
    column: usize,
    last_char_was_cr: bool,
}

impl<'src> SourceCursor<'src> {
    /// Creates a cursor positioned at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            byte_offset: 0,
            line: 0,
            column: 0,
            last_char_was_cr: false,
        }
    }

    /// Returns the unconsumed remainder of the source.
    pub fn rest(&self) -> &'src str {
        &self.source[self.byte_offset..]
    }

    /// Returns `true` when the whole source has been consumed.
    pub fn at_eof(&self) -> bool {
        self.byte_offset >= self.source.len()
    }

    /// Returns the current position.
    pub fn position(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.column, self.byte_offset)
    }

    /// Peeks at the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Peeks at the character after the next one.
    pub fn peek2(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    /// Consumes and returns the next character, updating line/column
    /// tracking.
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.byte_offset += ch.len_utf8();

        match ch {
            '\n' => {
                if self.last_char_was_cr {
                    // The `\n` of a `\r\n` pair; the line was already
                    // counted at the `\r`.
                    self.last_char_was_cr = false;
                } else {
                    self.line += 1;
                    self.column = 0;
                }
            }
            '\r' => {
                self.line += 1;
                self.column = 0;
                self.last_char_was_cr = true;
            }
            _ => {
                self.column += 1;
                self.last_char_was_cr = false;
            }
        }

        Some(ch)
    }

    /// Consumes `expected` if it is the next character.
    ///
    /// Returns `true` when the character was consumed.
    pub fn eat_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes `expected` if the remaining source starts with it.
    ///
    /// Returns `true` when the string was consumed.
    pub fn eat_str(&mut self, expected: &str) -> bool {
        if self.rest().starts_with(expected) {
            for _ in expected.chars() {
                self.bump();
            }
            true
        } else {
            false
        }
    }

    /// Advances the cursor by `n` bytes, which must land on a character
    /// boundary within the source.
    pub(crate) fn advance_bytes(&mut self, n: usize) {
        let target = self.byte_offset + n;
        while self.byte_offset < target {
            self.bump();
        }
    }

    /// Takes a snapshot of the current state for later [`restore`].
    ///
    /// [`restore`]: SourceCursor::restore
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            byte_offset: self.byte_offset,
            line: self.line,
            column: self.column,
            last_char_was_cr: self.last_char_was_cr,
        }
    }

    /// Rewinds the cursor to a previously taken snapshot.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.byte_offset = snapshot.byte_offset;
        self.line = snapshot.line;
        self.column = snapshot.column;
        self.last_char_was_cr = snapshot.last_char_was_cr;
    }

    /// Returns the source text consumed since `snapshot` was taken.
    pub fn consumed_since(&self, snapshot: &CursorSnapshot) -> &'src str {
        &self.source[snapshot.byte_offset..self.byte_offset]
    }

    /// Returns a short snippet of the unconsumed source, for error
    /// messages.
    pub fn snippet(&self) -> &'src str {
        let rest = self.rest();
        let mut end = rest.len().min(32);
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        &rest[..end]
    }
}
