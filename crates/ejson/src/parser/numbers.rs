use alloc::string::ToString;

use super::Reader;
use crate::{
    builder::{Builder, Leaf},
    cursor::Cursor,
    error::{ErrorKind, ParseError},
};

/// Lexical hint so integers and doubles can be told apart.
enum NumberLexeme<'a> {
    Integer(&'a str), // no '.' and no exponent
    Float(&'a str),   // has '.' or exponent
}

impl<B: Builder> Reader<'_, '_, B> {
    /// Parses a number starting at the cursor.
    ///
    /// Integers narrow to [`Leaf::Int32`] when they fit and are
    /// [`Leaf::Int64`] otherwise.
    pub(super) fn parse_number(&mut self) -> Result<Leaf<'static>, ParseError> {
        let start = self.cursor.position();
        let leaf = match lex_number(&mut self.cursor) {
            NumberLexeme::Float(lexeme) => lexeme.parse::<f64>().ok().map(Leaf::Double),
            NumberLexeme::Integer(lexeme) => lexeme.parse::<i64>().ok().map(|n| {
                i32::try_from(n).map_or(Leaf::Int64(n), Leaf::Int32)
            }),
        };
        leaf.ok_or_else(|| {
            let lexeme = self.cursor.slice(start, self.cursor.position()).to_string();
            self.cursor.error_at(start, ErrorKind::InvalidNumber(lexeme))
        })
    }
}

fn lex_number<'src>(cursor: &mut Cursor<'src>) -> NumberLexeme<'src> {
    let start = cursor.position();
    let mut floating = false;

    if matches!(cursor.peek_raw(), Some('+' | '-')) {
        cursor.bump();
    }
    eat_digits(cursor);
    if cursor.peek_raw() == Some('.') {
        cursor.bump();
        eat_digits(cursor);
        floating = true;
    }
    if matches!(cursor.peek_raw(), Some('e' | 'E')) {
        cursor.bump();
        if matches!(cursor.peek_raw(), Some('+' | '-')) {
            cursor.bump();
        }
        eat_digits(cursor);
        floating = true;
    }

    let lexeme = cursor.slice(start, cursor.position());
    if floating {
        NumberLexeme::Float(lexeme)
    } else {
        NumberLexeme::Integer(lexeme)
    }
}

fn eat_digits(cursor: &mut Cursor<'_>) {
    while cursor.peek_raw().is_some_and(|c| c.is_ascii_digit()) {
        cursor.bump();
    }
}
