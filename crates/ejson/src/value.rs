//! Extended-JSON value types and their canonical text rendering.
//!
//! [`Value`] is what [`parse`](crate::parse) produces by default. Its
//! [`Display`](core::fmt::Display) implementation writes text that parses back
//! to an equal value.

use alloc::{string::String, vec::Vec};
use core::fmt::{self, Write};

/// Object members in source order. Duplicate keys are kept; lookups through
/// [`Value::get`] see the last occurrence.
pub type Map = Vec<(String, Value)>;
/// Array elements in source order.
pub type Array = Vec<Value>;

/// A parsed extended-JSON value.
///
/// # Examples
///
/// ```
/// use ejson::Value;
///
/// let v = Value::Object(vec![("qty".into(), Value::Int32(3))]);
/// assert_eq!(v.to_string(), r#"{"qty":3}"#);
/// ```
// Serde support is always on for tests and otherwise behind the `serde`
// feature.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// `null`
    #[default]
    Null,
    /// The bare `NaN` literal.
    NaN,
    /// `true` or `false`
    Bool(bool),
    /// An integer literal that fits in 32 bits.
    Int32(i32),
    /// An integer literal outside the 32-bit range.
    Int64(i64),
    /// A number written with a fraction or exponent.
    Double(f64),
    /// A quoted string, escapes decoded.
    String(String),
    /// A `/pattern/options` literal. Only produced by a
    /// [`ValueBuilder`](crate::ValueBuilder) with typed regexes enabled; by
    /// default regex literals become `$regex`/`$options` objects.
    Regex {
        /// Text between the slashes, escapes decoded.
        pattern: String,
        /// Option characters after the closing slash.
        options: String,
    },
    /// Raw source of a `function (...) { ... }` literal, never interpreted.
    FunctionLiteral(String),
    /// `{ ... }`
    Object(Map),
    /// `[ ... ]`
    Array(Array),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int32(v)
    }
}

impl From<i64> for Value {
    /// Narrows to [`Value::Int32`] when the value fits, the same way the
    /// parser does.
    fn from(v: i64) -> Self {
        i32::try_from(v).map_or(Self::Int64(v), Self::Int32)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`](Value::Null).
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is an [`Object`](Value::Object).
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns `true` if the value is an [`Array`](Value::Array).
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Looks up `key` in an object, returning the last member with that key.
    ///
    /// # Examples
    ///
    /// ```
    /// let v = ejson::parse("{a: 1, a: 2}").unwrap().unwrap();
    /// assert_eq!(v.get("a"), Some(&ejson::Value::Int32(2)));
    /// assert_eq!(v.get("b"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Object(members) => members.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// The contents of a [`String`](Value::String).
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The contents of a [`Bool`](Value::Bool).
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Either integer width, widened to `i64`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int32(n) => Some(i64::from(*n)),
            Self::Int64(n) => Some(*n),
            _ => None,
        }
    }

    /// Any numeric value as `f64`, including `NaN`. `Int64` values beyond
    /// 2^53 lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::NaN => Some(f64::NAN),
            Self::Int32(n) => Some(f64::from(*n)),
            Self::Int64(n) => Some(*n as f64),
            Self::Double(n) => Some(*n),
            _ => None,
        }
    }
}

/// Writes `src` as the body of a double-quoted string literal using only
/// escapes the parser understands.
pub(crate) fn write_escaped_string<W: Write>(src: &str, f: &mut W) -> fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{8}' => f.write_str("\\b")?,
            '\u{2028}' | '\u{2029}' => write!(f, "\\u{:04X}", c as u32)?,
            c if c.is_control() && (c as u32) <= 0xFFFF => write!(f, "\\u{:04X}", c as u32)?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Writes a regex pattern so that reading it back between slashes yields the
/// same text.
fn write_escaped_pattern<W: Write>(src: &str, f: &mut W) -> fmt::Result {
    for c in src.chars() {
        match c {
            '/' => f.write_str("\\/")?,
            '\\' => f.write_str("\\\\")?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Writes a regex in its `{"$regex": ..., "$options": ...}` object form,
/// leaving out empty options.
fn write_regex_object<W: Write>(pattern: &str, options: &str, f: &mut W) -> fmt::Result {
    f.write_str("{\"$regex\":\"")?;
    write_escaped_string(pattern, f)?;
    f.write_char('"')?;
    if !options.is_empty() {
        f.write_str(",\"$options\":\"")?;
        write_escaped_string(options, f)?;
        f.write_char('"')?;
    }
    f.write_char('}')
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::NaN => f.write_str("NaN"),
            Value::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Int32(n) => write!(f, "{n}"),
            Value::Int64(n) => write!(f, "{n}"),
            // `Debug` always keeps a fraction or exponent, so the text reads
            // back as a double rather than an integer.
            Value::Double(n) => write!(f, "{n:?}"),
            Value::String(s) => {
                f.write_char('"')?;
                write_escaped_string(s, f)?;
                f.write_char('"')
            }
            Value::Regex { pattern, options } => {
                f.write_char('/')?;
                write_escaped_pattern(pattern, f)?;
                write!(f, "/{options}")
            }
            Value::FunctionLiteral(src) => f.write_str(src),
            Value::Array(items) => {
                f.write_char('[')?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_char(']')
            }
            Value::Object(members) => {
                f.write_char('{')?;
                for (i, (k, v)) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    f.write_char('"')?;
                    write_escaped_string(k, f)?;
                    f.write_str("\":")?;
                    match v {
                        // A literal under `$regex` would read back as the
                        // bare pattern.
                        Value::Regex { pattern, options } if k == "$regex" => {
                            write_regex_object(pattern, options, f)?;
                        }
                        _ => write!(f, "{v}")?,
                    }
                }
                f.write_char('}')
            }
        }
    }
}
