//! A parser for the extended JSON typed into the query, filter and sort fields
//! of a database shell or admin UI.
//!
//! On top of JSON the grammar accepts:
//!
//! - unquoted keys (`{qty: 1}`) and single-quoted strings (`'abc'`),
//! - the bare literal `NaN`,
//! - regex literals `/pattern/options`, turned into `{$regex, $options}`
//!   objects (or into the plain pattern when written as the value of a
//!   `$regex` key),
//! - `function (...) { ... }` literals, captured verbatim,
//! - integers narrowed to 32 bits when they fit.
//!
//! ```rust
//! use ejson::Value;
//!
//! let v = ejson::parse("{name: /^jo/i, age: {$gte: 21}}").unwrap().unwrap();
//! assert_eq!(
//!     v.to_string(),
//!     r#"{"name":{"$regex":"^jo","$options":"i"},"age":{"$gte":21}}"#
//! );
//! assert_eq!(ejson::parse_as_array("1, 2").unwrap(), Some(Value::Array(vec![Value::Int32(1), Value::Int32(2)])));
//! ```
//!
//! Output goes through the [`Builder`] trait; [`ValueBuilder`] produces
//! [`Value`], and [`parse_with`] accepts any other implementation.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod builder;
mod cursor;
mod error;
mod escape_buffer;
mod options;
mod parser;
mod value;
mod value_builder;

#[cfg(test)]
mod tests;

pub use builder::{Builder, Leaf};
pub use error::{ErrorKind, Expected, Found, ParseError};
pub use options::ParserOptions;
pub use parser::Parser;
pub use value::{Array, Map, Value};
pub use value_builder::ValueBuilder;

/// Parses `text` with the default [`ParserOptions`].
///
/// Returns `Ok(None)` for empty or blank input.
///
/// # Errors
///
/// Returns a [`ParseError`] at the first grammar violation.
pub fn parse(text: &str) -> Result<Option<Value>, ParseError> {
    Parser::default().parse(text)
}

/// Parses `text` as an array, wrapping it in `[` `]` unless it already starts
/// with `[`.
///
/// # Errors
///
/// Returns a [`ParseError`] at the first grammar violation.
pub fn parse_as_array(text: &str) -> Result<Option<Value>, ParseError> {
    Parser::default().parse_as_array(text)
}

/// Parses `text` with the default [`ParserOptions`], reporting to `builder`.
///
/// # Errors
///
/// Returns a [`ParseError`] at the first grammar violation.
pub fn parse_with<B: Builder>(text: &str, builder: &mut B) -> Result<Option<B::Output>, ParseError> {
    Parser::default().parse_with(text, builder)
}
