#![no_main]

use arbitrary::Arbitrary;
use ejson::{Parser, ParserOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    as_array: bool,
    allow_trailing_characters: bool,
    max_depth: u8,
    text: &'a str,
}

fn parser(input: &Input<'_>) {
    let parser = Parser::new(ParserOptions {
        max_depth: usize::from(input.max_depth),
        allow_trailing_characters: input.allow_trailing_characters,
        ..ParserOptions::default()
    });
    let result = if input.as_array {
        parser.parse_as_array(input.text)
    } else {
        parser.parse(input.text)
    };
    if let Err(err) = result {
        // Offsets always land on a character of the text that was parsed.
        assert!(err.input().is_char_boundary(err.offset()));
        let _ = err.to_string();
    }
}

fuzz_target!(|input: Input<'_>| parser(&input));
