#![allow(missing_docs)]

use core::fmt::Write;

use ejson::{Parser, ParseError, ValueBuilder};

/// One line per query: the canonical text, or the error with its position.
fn render(queries: &[&str]) -> String {
    let mut out = String::new();
    for query in queries {
        match ejson::parse(query) {
            Ok(Some(value)) => writeln!(out, "{value}").unwrap(),
            Ok(None) => writeln!(out, "<blank>").unwrap(),
            Err(err) => writeln!(out, "error: {err}").unwrap(),
        }
    }
    out
}

fn render_error(err: &ParseError) -> String {
    format!(
        "{} (offset {}, line {}, column {})",
        err.kind(),
        err.offset(),
        err.line(),
        err.column()
    )
}

#[test]
fn snapshot_typical_queries() {
    let queries = [
        "{status: 'A', qty: {$lt: 30}}",
        "{$or: [{status: \"A\"}, {qty: {$lt: 30}}]}",
        "{name: /^jo/im}",
        "{name: {$regex: /^jo/, $options: 'i'}}",
        "{big: 9007199254740993, ratio: 2.5e-3, missing: NaN}",
        "{$where: function() { return this.a > 1; }}",
        "   ",
    ];

    insta::assert_snapshot!(render(&queries), @r#"
    {"status":"A","qty":{"$lt":30}}
    {"$or":[{"status":"A"},{"qty":{"$lt":30}}]}
    {"name":{"$regex":"^jo","$options":"im"}}
    {"name":{"$regex":"^jo","$options":"i"}}
    {"big":9007199254740993,"ratio":0.0025,"missing":NaN}
    {"$where":function() { return this.a > 1; }}
    <blank>
    "#);
}

#[test]
fn snapshot_rejected_queries() {
    let queries = ["{qty: }", "{name: /abc}", "[1, 2", "{a: 1} }"];
    let rendered: Vec<String> = queries
        .iter()
        .map(|q| render_error(&ejson::parse(q).unwrap_err()))
        .collect();

    insta::assert_snapshot!(rendered.join("\n"), @r"
    expected a value, found '}' (offset 6, line 1, column 7)
    unterminated regular expression (offset 7, line 1, column 8)
    expected ',' or ']', found end of input (offset 5, line 1, column 6)
    unexpected trailing character '}' (offset 7, line 1, column 8)
    ");
}

#[test]
fn typed_regex_renders_as_a_literal() {
    let mut builder = ValueBuilder::typed_regex();
    let v = Parser::default()
        .parse_with("{name: /a\\/b/i}", &mut builder)
        .unwrap()
        .unwrap();
    insta::assert_snapshot!(v.to_string(), @r#"{"name":/a\/b/i}"#);
}
