use alloc::{borrow::Cow, string::String};

use crate::value::Value;

/// Event sink that turns parse events into a document.
///
/// The parser only ever talks to this trait, so the same grammar can produce
/// [`Value`] (through [`ValueBuilder`](crate::ValueBuilder)) or a database
/// driver's native document type.
///
/// Every leaf event carries the `name` it is stored under: the object key, or
/// the array index rendered as decimal text. Containers are announced with
/// `*_start(name)` and closed with `*_done()`; a nested container is expected
/// to attach itself to its parent when it closes, so the parser only uses the
/// value returned by the outermost `*_done()`.
pub trait Builder {
    /// The finished document.
    type Output;

    /// Opens an object. `name` is `None` at the root.
    fn object_start(&mut self, name: Option<&str>);

    /// Closes the innermost object. Returns the document once the root
    /// container closes and `None` otherwise.
    fn object_done(&mut self) -> Option<Self::Output>;

    /// Opens an array. `name` is `None` at the root.
    fn array_start(&mut self, name: Option<&str>);

    /// Closes the innermost array, see [`object_done`](Self::object_done).
    fn array_done(&mut self) -> Option<Self::Output>;

    /// `null` stored under `name`.
    fn got_null(&mut self, name: &str);
    /// `true` or `false`.
    fn got_boolean(&mut self, name: &str, value: bool);
    /// An integer in the 32-bit range.
    fn got_int(&mut self, name: &str, value: i32);
    /// An integer outside the 32-bit range.
    fn got_long(&mut self, name: &str, value: i64);
    /// A number with a fraction or exponent.
    fn got_double(&mut self, name: &str, value: f64);
    /// A string with its escapes decoded.
    fn got_string(&mut self, name: &str, value: &str);

    /// A bare `NaN`. Reported as a double unless overridden.
    fn got_nan(&mut self, name: &str) {
        self.got_double(name, f64::NAN);
    }

    /// Raw source of a function literal. Reported as a string unless
    /// overridden.
    fn got_function(&mut self, name: &str, source: &str) {
        self.got_string(name, source);
    }

    /// Produces the document for input whose root is a scalar.
    fn got_root(&mut self, leaf: Leaf<'_>) -> Self::Output;
}

/// A scalar as read from the input, before a [`Builder`] sees it.
///
/// Strings borrow from the input unless an escape forced a copy.
#[derive(Debug, Clone, PartialEq)]
pub enum Leaf<'src> {
    /// `null`
    Null,
    /// `NaN`
    NaN,
    /// `true` / `false`
    Bool(bool),
    /// Integer in the 32-bit range.
    Int32(i32),
    /// Integer outside the 32-bit range.
    Int64(i64),
    /// Number with a fraction or exponent.
    Double(f64),
    /// Quoted string, or the pattern of a regex used as a `$regex` value.
    String(Cow<'src, str>),
    /// Function literal source, `function` through the closing `}`.
    Function(&'src str),
}

impl Leaf<'_> {
    /// Routes the leaf to the matching `got_*` event.
    pub fn emit<B: Builder + ?Sized>(&self, name: &str, builder: &mut B) {
        match self {
            Leaf::Null => builder.got_null(name),
            Leaf::NaN => builder.got_nan(name),
            Leaf::Bool(b) => builder.got_boolean(name, *b),
            Leaf::Int32(n) => builder.got_int(name, *n),
            Leaf::Int64(n) => builder.got_long(name, *n),
            Leaf::Double(n) => builder.got_double(name, *n),
            Leaf::String(s) => builder.got_string(name, s),
            Leaf::Function(src) => builder.got_function(name, src),
        }
    }
}

impl From<Leaf<'_>> for Value {
    fn from(leaf: Leaf<'_>) -> Self {
        match leaf {
            Leaf::Null => Value::Null,
            Leaf::NaN => Value::NaN,
            Leaf::Bool(b) => Value::Bool(b),
            Leaf::Int32(n) => Value::Int32(n),
            Leaf::Int64(n) => Value::Int64(n),
            Leaf::Double(n) => Value::Double(n),
            Leaf::String(s) => Value::String(s.into_owned()),
            Leaf::Function(src) => Value::FunctionLiteral(String::from(src)),
        }
    }
}
