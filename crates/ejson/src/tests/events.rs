//! Checks the exact builder events emitted for extended-JSON constructs, using
//! a builder that only records what it is told.

use alloc::{format, string::String, vec::Vec};

use insta::assert_snapshot;

use crate::{Builder, Leaf, parse_with};

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
    open: usize,
}

impl Recorder {
    fn log(&mut self, event: String) {
        self.events.push(event);
    }

    fn close(&mut self, what: &str) -> Option<usize> {
        self.log(format!("{what}_done"));
        self.open -= 1;
        (self.open == 0).then_some(self.events.len())
    }
}

impl Builder for Recorder {
    type Output = usize;

    fn object_start(&mut self, name: Option<&str>) {
        self.open += 1;
        self.log(format!("object_start {name:?}"));
    }

    fn object_done(&mut self) -> Option<usize> {
        self.close("object")
    }

    fn array_start(&mut self, name: Option<&str>) {
        self.open += 1;
        self.log(format!("array_start {name:?}"));
    }

    fn array_done(&mut self) -> Option<usize> {
        self.close("array")
    }

    fn got_null(&mut self, name: &str) {
        self.log(format!("null {name}"));
    }

    fn got_boolean(&mut self, name: &str, value: bool) {
        self.log(format!("bool {name} {value}"));
    }

    fn got_int(&mut self, name: &str, value: i32) {
        self.log(format!("int {name} {value}"));
    }

    fn got_long(&mut self, name: &str, value: i64) {
        self.log(format!("long {name} {value}"));
    }

    fn got_double(&mut self, name: &str, value: f64) {
        self.log(format!("double {name} {value:?}"));
    }

    fn got_string(&mut self, name: &str, value: &str) {
        self.log(format!("string {name} {value:?}"));
    }

    fn got_root(&mut self, leaf: Leaf<'_>) -> usize {
        self.log(format!("root {leaf:?}"));
        self.events.len()
    }
}

fn record(text: &str) -> String {
    let mut recorder = Recorder::default();
    let count = parse_with(text, &mut recorder)
        .expect("input should parse")
        .expect("input is not blank");
    assert_eq!(count, recorder.events.len());
    recorder.events.join("\n")
}

#[test]
fn snapshot_query_document() {
    let events = record(
        "{name: /^jo/i, tags: ['a', 2147483648], score: {$gt: 1.5}, $where: function() { return true; }, x: NaN}",
    );

    assert_snapshot!(events, @r#"
    object_start None
    object_start Some("name")
    string $regex "^jo"
    string $options "i"
    object_done
    array_start Some("tags")
    string 0 "a"
    long 1 2147483648
    array_done
    object_start Some("score")
    double $gt 1.5
    object_done
    string $where "function() { return true; }"
    double x NaN
    object_done
    "#);
}

#[test]
fn regex_as_regex_value_is_a_plain_string() {
    assert_eq!(
        record("{f: {$regex: /a.c/, $options: 'm'}}"),
        [
            "object_start None",
            "object_start Some(\"f\")",
            "string $regex \"a.c\"",
            "string $options \"m\"",
            "object_done",
            "object_done",
        ]
        .join("\n")
    );
}

#[test]
fn top_level_regex_opens_a_root_object() {
    assert_eq!(
        record("/x/m"),
        [
            "object_start None",
            "string $regex \"x\"",
            "string $options \"m\"",
            "object_done",
        ]
        .join("\n")
    );
}

#[test]
fn root_scalars_go_through_got_root() {
    assert_eq!(record(" 'hi' "), "root String(\"hi\")");
    assert_eq!(record("-7"), "root Int32(-7)");
    assert_eq!(
        record("function() {}"),
        "root Function(\"function() {}\")"
    );
}

#[test]
fn array_elements_are_named_by_index() {
    let events = record("[null, [true], {}]");
    assert_eq!(
        events,
        [
            "array_start None",
            "null 0",
            "array_start Some(\"1\")",
            "bool 0 true",
            "array_done",
            "object_start Some(\"2\")",
            "object_done",
            "array_done",
        ]
        .join("\n")
    );
}
