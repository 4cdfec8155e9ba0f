use alloc::string::{String, ToString};
use core::fmt;

use thiserror::Error;

/// The error returned when an expression cannot be parsed.
///
/// Carries a copy of the input together with the byte offset of the
/// offending character, so callers can point at the problem.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind} at {line}:{column}")]
pub struct ParseError {
    kind: ErrorKind,
    input: String,
    offset: usize,
    line: usize,
    column: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, input: &str, offset: usize) -> Self {
        let offset = offset.min(input.len());
        let consumed = input.get(..offset).unwrap_or(input);
        let line = consumed.matches('\n').count() + 1;
        let line_start = consumed.rfind('\n').map_or(0, |i| i + 1);
        let column = consumed[line_start..].chars().count() + 1;
        Self {
            kind,
            input: input.to_string(),
            offset,
            line,
            column,
        }
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The full text that was being parsed.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Byte offset of the offending character within [`input`](Self::input).
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 1-based line of the offending character.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column, counted in characters, of the offending character.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }
}

/// The specific grammar violation behind a [`ParseError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The parser wanted one thing and found another.
    #[error("expected {expected}, found {found}")]
    Unexpected {
        /// What the grammar allows at this position.
        expected: Expected,
        /// What the input actually contains.
        found: Found,
    },
    /// A quoted string has no closing quote.
    #[error("unterminated string")]
    UnterminatedString,
    /// A `/pattern/` literal has no closing slash.
    #[error("unterminated regular expression")]
    UnterminatedRegex,
    /// A function literal's braces never balance.
    #[error("unterminated function body")]
    UnterminatedFunction,
    /// A `\u` escape names a lone surrogate.
    #[error("invalid unicode escape sequence \\u{0:04X}")]
    InvalidUnicodeEscape(u16),
    /// The number lexeme does not denote a representable number.
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    /// A regex literal is followed by something other than `i`/`m` options.
    #[error("invalid regular expression option '{0}'")]
    InvalidRegexOption(char),
    /// Options were given to a regex literal used as a raw `$regex` value.
    #[error("options `{0}` are not allowed on a `$regex` value")]
    RegexOptionsNotAllowed(String),
    /// Input continues after the root value.
    #[error("unexpected trailing character '{0}'")]
    TrailingCharacters(char),
    /// Containers are nested deeper than [`ParserOptions::max_depth`].
    ///
    /// [`ParserOptions::max_depth`]: crate::ParserOptions::max_depth
    #[error("nesting exceeds the maximum depth of {0}")]
    DepthLimitExceeded(usize),
    /// The input is longer than [`ParserOptions::max_input_len`].
    ///
    /// [`ParserOptions::max_input_len`]: crate::ParserOptions::max_input_len
    #[error("input of {len} bytes exceeds the limit of {max} bytes")]
    InputTooLong {
        /// Length of the rejected input.
        len: usize,
        /// Configured limit.
        max: usize,
    },
    /// The builder produced no output when the root container closed.
    #[error("builder produced no document")]
    IncompleteDocument,
}

/// What the grammar allowed at the point of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A specific punctuation character.
    Char(char),
    /// A keyword such as `null` or `function`.
    Keyword(&'static str),
    /// The start of any value.
    Value,
    /// An opening `'` or `"`.
    Quote,
    /// A hexadecimal digit inside a `\u` escape.
    HexDigit,
    /// The character following a backslash.
    EscapeSequence,
    /// A `,` or the `]` closing an array.
    ArraySeparator,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "'{c}'"),
            Self::Keyword(kw) => write!(f, "`{kw}`"),
            Self::Value => f.write_str("a value"),
            Self::Quote => f.write_str("a quote"),
            Self::HexDigit => f.write_str("a hex digit"),
            Self::EscapeSequence => f.write_str("an escape sequence"),
            Self::ArraySeparator => f.write_str("',' or ']'"),
        }
    }
}

/// The character found at the point of failure; `None` is end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Found(pub Option<char>);

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(c) => write!(f, "'{}'", c.escape_debug()),
            None => f.write_str("end of input"),
        }
    }
}
