use alloc::{borrow::ToOwned, string::String, vec::Vec};

use crate::{
    builder::{Builder, Leaf},
    value::{Array, Map, Value},
};

/// The default [`Builder`], materializing a [`Value`] tree.
///
/// Open containers live on a stack. When one closes it is attached to its
/// parent under the name it was opened with, or handed back as the finished
/// document if it was the root.
#[derive(Debug, Default)]
pub struct ValueBuilder {
    stack: Vec<Frame>,
    typed_regex: bool,
}

#[derive(Debug)]
struct Frame {
    name: Option<String>,
    node: Node,
}

#[derive(Debug)]
enum Node {
    Object(Map),
    Array(Array),
}

impl ValueBuilder {
    /// Creates a builder that keeps regex literals as `$regex`/`$options`
    /// objects.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder that turns objects holding only a string `$regex`
    /// and an optional string `$options` into [`Value::Regex`].
    ///
    /// This applies to objects written out by hand as well as to regex
    /// literals, since both produce the same events.
    ///
    /// ```
    /// use ejson::{Parser, Value, ValueBuilder};
    ///
    /// let mut builder = ValueBuilder::typed_regex();
    /// let v = Parser::default().parse_with("{name: /^ab/i}", &mut builder).unwrap();
    /// assert_eq!(
    ///     v.unwrap().get("name"),
    ///     Some(&Value::Regex { pattern: "^ab".into(), options: "i".into() })
    /// );
    /// ```
    #[must_use]
    pub fn typed_regex() -> Self {
        Self {
            stack: Vec::new(),
            typed_regex: true,
        }
    }

    fn start(&mut self, name: Option<&str>, node: Node) {
        self.stack.push(Frame {
            name: name.map(ToOwned::to_owned),
            node,
        });
    }

    fn push(&mut self, name: &str, value: Value) {
        match self.stack.last_mut() {
            Some(Frame {
                node: Node::Object(members),
                ..
            }) => members.push((name.to_owned(), value)),
            Some(Frame {
                node: Node::Array(items),
                ..
            }) => items.push(value),
            // The parser reports root scalars through `got_root`.
            None => {}
        }
    }

    fn done(&mut self) -> Option<Value> {
        let frame = self.stack.pop()?;
        let value = match frame.node {
            Node::Object(members) if self.typed_regex => into_regex(members),
            Node::Object(members) => Value::Object(members),
            Node::Array(items) => Value::Array(items),
        };
        if self.stack.is_empty() {
            return Some(value);
        }
        self.push(frame.name.as_deref().unwrap_or_default(), value);
        None
    }
}

fn into_regex(members: Map) -> Value {
    let members = match <[(String, Value); 1]>::try_from(members) {
        Ok([(key, Value::String(pattern))]) if key == "$regex" => {
            return Value::Regex {
                pattern,
                options: String::new(),
            };
        }
        Ok(one) => return Value::Object(one.into()),
        Err(members) => members,
    };
    match <[(String, Value); 2]>::try_from(members) {
        Ok([(k1, Value::String(pattern)), (k2, Value::String(options))])
            if k1 == "$regex" && k2 == "$options" =>
        {
            Value::Regex { pattern, options }
        }
        Ok(two) => Value::Object(two.into()),
        Err(members) => Value::Object(members),
    }
}

impl Builder for ValueBuilder {
    type Output = Value;

    fn object_start(&mut self, name: Option<&str>) {
        self.start(name, Node::Object(Map::new()));
    }

    fn object_done(&mut self) -> Option<Value> {
        self.done()
    }

    fn array_start(&mut self, name: Option<&str>) {
        self.start(name, Node::Array(Array::new()));
    }

    fn array_done(&mut self) -> Option<Value> {
        self.done()
    }

    fn got_null(&mut self, name: &str) {
        self.push(name, Value::Null);
    }

    fn got_boolean(&mut self, name: &str, value: bool) {
        self.push(name, Value::Bool(value));
    }

    fn got_int(&mut self, name: &str, value: i32) {
        self.push(name, Value::Int32(value));
    }

    fn got_long(&mut self, name: &str, value: i64) {
        self.push(name, Value::Int64(value));
    }

    fn got_double(&mut self, name: &str, value: f64) {
        self.push(name, Value::Double(value));
    }

    fn got_string(&mut self, name: &str, value: &str) {
        self.push(name, Value::String(value.to_owned()));
    }

    fn got_nan(&mut self, name: &str) {
        self.push(name, Value::NaN);
    }

    fn got_function(&mut self, name: &str, source: &str) {
        self.push(name, Value::FunctionLiteral(source.to_owned()));
    }

    fn got_root(&mut self, leaf: Leaf<'_>) -> Value {
        leaf.into()
    }
}
