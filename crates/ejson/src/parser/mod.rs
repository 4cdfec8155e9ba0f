//! Recursive-descent parser for extended JSON.
//!
//! The grammar is a superset of JSON as typed into query fields: keys may be
//! unquoted, strings may use single quotes, and values may be `NaN`,
//! `/pattern/options` regex literals or `function (...) { ... }` source.
//!
//! Each call owns a fresh [`Cursor`] and borrows the caller's [`Builder`];
//! nothing outlives the call, so independent parses can run on separate
//! threads.
//!
//! Values are reported to the builder as they complete: scalars inside a
//! container become `got_*` events named by their key or index, containers
//! are bracketed by `*_start` / `*_done`. Which event a value turns into is
//! decided by the value itself (see [`Leaf::emit`]), with one exception: a
//! regex literal depends on the name it is parsed under, which is why the
//! current key is threaded through [`Reader::parse_value`].

mod function;
mod numbers;
mod regex;
mod strings;

use alloc::{format, string::ToString};

use crate::{
    builder::{Builder, Leaf},
    cursor::Cursor,
    error::{ErrorKind, Expected, ParseError},
    options::ParserOptions,
    value::Value,
    value_builder::ValueBuilder,
};

/// Parses extended-JSON expressions with a fixed set of [`ParserOptions`].
///
/// # Examples
///
/// ```
/// use ejson::{Parser, Value};
///
/// let parser = Parser::default();
/// let v = parser.parse("{qty: {$gt: 20}}").unwrap().unwrap();
/// assert_eq!(v.get("qty").and_then(|q| q.get("$gt")), Some(&Value::Int32(20)));
///
/// // Blank input is not an error, there is simply nothing to parse.
/// assert_eq!(parser.parse("   ").unwrap(), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    /// Creates a parser with the given options.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// The options this parser was created with.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses `text` into a [`Value`].
    ///
    /// Returns `Ok(None)` when `text` is empty or only whitespace.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] at the first grammar violation.
    pub fn parse(&self, text: &str) -> Result<Option<Value>, ParseError> {
        self.parse_with(text, &mut ValueBuilder::new())
    }

    /// Parses `text` as an array, adding the surrounding brackets when the
    /// input does not start with `[`.
    ///
    /// ```
    /// use ejson::{Parser, Value};
    ///
    /// let v = Parser::default().parse_as_array("1, 'two'").unwrap().unwrap();
    /// assert_eq!(v, Value::Array(vec![Value::Int32(1), Value::String("two".into())]));
    /// ```
    ///
    /// # Errors
    ///
    /// As [`parse`](Self::parse). Offsets in the error refer to the bracketed
    /// text when brackets were added.
    pub fn parse_as_array(&self, text: &str) -> Result<Option<Value>, ParseError> {
        self.parse_as_array_with(text, &mut ValueBuilder::new())
    }

    /// Parses `text`, reporting every value to `builder`.
    ///
    /// Returns whatever the builder produced for the root value, or
    /// `Ok(None)` for blank input.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] at the first grammar violation. The builder
    /// may have received events for the input before the failure; it should
    /// be discarded.
    pub fn parse_with<B: Builder>(
        &self,
        text: &str,
        builder: &mut B,
    ) -> Result<Option<B::Output>, ParseError> {
        self.traced(text, text.len(), builder)
    }

    /// [`parse_as_array`](Self::parse_as_array) with a caller-supplied
    /// builder.
    ///
    /// # Errors
    ///
    /// As [`parse_with`](Self::parse_with).
    pub fn parse_as_array_with<B: Builder>(
        &self,
        text: &str,
        builder: &mut B,
    ) -> Result<Option<B::Output>, ParseError> {
        match text.trim_start().chars().next() {
            None | Some('[') => self.parse_with(text, builder),
            Some(_) => self.traced(&format!("[{text}]"), text.len(), builder),
        }
    }

    /// Parses `text`, checking the length limit against `input_len`, the
    /// length of what the caller passed in before any bracketing.
    fn traced<B: Builder>(
        &self,
        text: &str,
        input_len: usize,
        builder: &mut B,
    ) -> Result<Option<B::Output>, ParseError> {
        tracing::trace!(
            len = input_len,
            max_depth = self.options.max_depth,
            "parsing extended JSON"
        );
        let result = self.run(text, input_len, builder);
        if let Err(err) = &result {
            tracing::debug!(offset = err.offset(), error = %err, "extended JSON rejected");
        }
        result
    }

    fn run<B: Builder>(
        &self,
        text: &str,
        input_len: usize,
        builder: &mut B,
    ) -> Result<Option<B::Output>, ParseError> {
        let mut reader = Reader {
            cursor: Cursor::new(text),
            builder,
            options: &self.options,
            depth: 0,
        };

        if let Some(max) = self.options.max_input_len {
            if input_len > max {
                return Err(reader.cursor.error(ErrorKind::InputTooLong {
                    len: input_len,
                    max,
                }));
            }
        }

        if reader.cursor.peek().is_none() {
            return Ok(None);
        }

        let root = reader.parse_value(None)?;

        if !self.options.allow_trailing_characters {
            if let Some(c) = reader.cursor.peek() {
                return Err(reader.cursor.error(ErrorKind::TrailingCharacters(c)));
            }
        }

        match root {
            Parsed::Leaf(leaf) => Ok(Some(reader.builder.got_root(leaf))),
            Parsed::Container(Some(output)) => Ok(Some(output)),
            Parsed::Container(None) => Err(reader.cursor.error(ErrorKind::IncompleteDocument)),
        }
    }
}

/// The outcome of parsing one value.
enum Parsed<'src, O> {
    /// A scalar the caller still has to report.
    Leaf(Leaf<'src>),
    /// A container, already reported. Holds the builder's output for the
    /// root container.
    Container(Option<O>),
}

/// State of one parse call.
struct Reader<'src, 'p, B> {
    cursor: Cursor<'src>,
    builder: &'p mut B,
    options: &'p ParserOptions,
    depth: usize,
}

impl<'src, B: Builder> Reader<'src, '_, B> {
    /// Parses the value at the cursor. `name` is the key or array index the
    /// value is stored under, `None` at the root.
    fn parse_value(&mut self, name: Option<&str>) -> Result<Parsed<'src, B::Output>, ParseError> {
        let leaf = match self.cursor.peek() {
            Some('n') => {
                self.cursor.expect_keyword("null")?;
                Leaf::Null
            }
            Some('N') => {
                self.cursor.expect_keyword("NaN")?;
                Leaf::NaN
            }
            Some('t') => {
                self.cursor.expect_keyword("true")?;
                Leaf::Bool(true)
            }
            Some('f') if self.cursor.rest().starts_with("fu") => self.parse_function()?,
            Some('f') => {
                self.cursor.expect_keyword("false")?;
                Leaf::Bool(false)
            }
            Some('\'' | '"') => Leaf::String(self.parse_string(true)?),
            Some('/') => return self.parse_regex(name),
            Some(c) if c.is_ascii_digit() || c == '+' || c == '-' => self.parse_number()?,
            Some('[') => return self.parse_array(name),
            Some('{') => return self.parse_object(name),
            found => return Err(self.cursor.unexpected(Expected::Value, found)),
        };
        Ok(Parsed::Leaf(leaf))
    }

    /// Reports a value parsed under `name` inside the current container.
    fn emit(&mut self, name: &str, parsed: &Parsed<'src, B::Output>) {
        // Containers reported themselves while they were parsed.
        if let Parsed::Leaf(leaf) = parsed {
            leaf.emit(name, &mut *self.builder);
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.options.max_depth {
            return Err(self
                .cursor
                .error(ErrorKind::DepthLimitExceeded(self.options.max_depth)));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_object(&mut self, name: Option<&str>) -> Result<Parsed<'src, B::Output>, ParseError> {
        self.enter()?;
        self.builder.object_start(name);
        self.cursor.expect('{')?;

        while self.cursor.peek() != Some('}') {
            let key = self.parse_string(false)?;
            self.cursor.expect(':')?;
            let value = self.parse_value(Some(key.as_ref()))?;
            self.emit(&key, &value);

            if self.cursor.peek() == Some(',') {
                self.cursor.bump();
            } else {
                break;
            }
        }

        self.cursor.expect('}')?;
        self.leave();
        Ok(Parsed::Container(self.builder.object_done()))
    }

    fn parse_array(&mut self, name: Option<&str>) -> Result<Parsed<'src, B::Output>, ParseError> {
        self.enter()?;
        self.builder.array_start(name);
        self.cursor.expect('[')?;

        if self.cursor.peek() != Some(']') {
            let mut index = 0usize;
            loop {
                let elem_name = index.to_string();
                index += 1;
                let value = self.parse_value(Some(elem_name.as_str()))?;
                self.emit(&elem_name, &value);

                match self.cursor.peek() {
                    Some(',') => {
                        self.cursor.bump();
                    }
                    Some(']') => break,
                    found => return Err(self.cursor.unexpected(Expected::ArraySeparator, found)),
                }
            }
        }

        self.cursor.expect(']')?;
        self.leave();
        Ok(Parsed::Container(self.builder.array_done()))
    }
}
