//! Read position over the input text.
//!
//! Every "significant" read ([`peek`](Cursor::peek), [`expect`](Cursor::expect))
//! first skips whitespace. The raw reads ([`peek_raw`](Cursor::peek_raw),
//! [`bump`](Cursor::bump), [`read_hex_digit`](Cursor::read_hex_digit)) do not,
//! and are what the string, regex and function scanners use so that
//! whitespace inside a literal is preserved.

use crate::error::{ErrorKind, Expected, Found, ParseError};

#[derive(Debug, Clone)]
pub(crate) struct Cursor<'src> {
    text: &'src str,
    /// Byte offset, always on a char boundary.
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(text: &'src str) -> Self {
        Self { text, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn rest(&self) -> &'src str {
        &self.text[self.pos..]
    }

    /// The input between two positions previously returned by
    /// [`position`](Self::position).
    pub fn slice(&self, start: usize, end: usize) -> &'src str {
        &self.text[start..end]
    }

    pub fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();
    }

    /// Next non-whitespace character, leaving the cursor on it. `None` at end
    /// of input.
    pub fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.peek_raw()
    }

    pub fn peek_raw(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advances past the character under the cursor without skipping
    /// whitespace first.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek_raw()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    pub fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += c.len_utf8();
                Ok(())
            }
            found => Err(self.unexpected(Expected::Char(expected), found)),
        }
    }

    /// Matches `keyword` as one contiguous run at the next significant
    /// position.
    pub fn expect_keyword(&mut self, keyword: &'static str) -> Result<(), ParseError> {
        self.skip_whitespace();
        let rest = self.rest();
        if rest.starts_with(keyword) {
            self.pos += keyword.len();
            return Ok(());
        }
        // Point at the first character that diverges from the keyword.
        let matched = rest
            .chars()
            .zip(keyword.chars())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| a.len_utf8())
            .sum::<usize>();
        self.pos += matched;
        Err(self.unexpected(Expected::Keyword(keyword), self.peek_raw()))
    }

    /// Consumes one hexadecimal digit and returns its value.
    pub fn read_hex_digit(&mut self) -> Result<u8, ParseError> {
        match self.peek_raw() {
            Some(c) => match c.to_digit(16) {
                // `to_digit(16)` is always below 16.
                #[allow(clippy::cast_possible_truncation)]
                Some(nibble) => {
                    self.pos += 1;
                    Ok(nibble as u8)
                }
                None => Err(self.unexpected(Expected::HexDigit, Some(c))),
            },
            None => Err(self.unexpected(Expected::HexDigit, None)),
        }
    }

    pub fn unexpected(&self, expected: Expected, found: Option<char>) -> ParseError {
        self.error(ErrorKind::Unexpected {
            expected,
            found: Found(found),
        })
    }

    pub fn error(&self, kind: ErrorKind) -> ParseError {
        self.error_at(self.pos, kind)
    }

    pub fn error_at(&self, offset: usize, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.text, offset)
    }
}
