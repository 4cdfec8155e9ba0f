use alloc::string::ToString;

use super::{Parsed, Reader, strings::scan_text};
use crate::{
    builder::{Builder, Leaf},
    error::{ErrorKind, ParseError},
};

/// The key under which a regex literal is taken as a plain pattern string.
const REGEX_KEY: &str = "$regex";
const OPTIONS_KEY: &str = "$options";

impl<'src, B: Builder> Reader<'src, '_, B> {
    /// Parses a `/pattern/options` literal.
    ///
    /// Under the key `$regex` the pattern is the value itself and options
    /// are rejected. Anywhere else the literal is reported as an object
    /// `{$regex: pattern, $options: options}` named `name`, with `$options`
    /// left out when there are none.
    pub(super) fn parse_regex(
        &mut self,
        name: Option<&str>,
    ) -> Result<Parsed<'src, B::Output>, ParseError> {
        let as_value = name == Some(REGEX_KEY);
        if !as_value {
            self.builder.object_start(name);
        }

        let open = self.cursor.position();
        self.cursor.expect('/')?;
        let pattern = scan_text(&mut self.cursor, |c| c == '/')?;
        if self.cursor.bump() != Some('/') {
            return Err(self.cursor.error_at(open, ErrorKind::UnterminatedRegex));
        }
        if !as_value {
            self.builder.got_string(REGEX_KEY, &pattern);
        }

        let options_start = self.cursor.position();
        while matches!(self.cursor.peek_raw(), Some('i' | 'm')) {
            self.cursor.bump();
        }
        let options = self.cursor.slice(options_start, self.cursor.position());

        match self.cursor.peek() {
            None | Some(',' | '}' | ']') => {}
            Some(c) => return Err(self.cursor.error(ErrorKind::InvalidRegexOption(c))),
        }

        if as_value {
            if !options.is_empty() {
                return Err(self.cursor.error_at(
                    options_start,
                    ErrorKind::RegexOptionsNotAllowed(options.to_string()),
                ));
            }
            return Ok(Parsed::Leaf(Leaf::String(pattern)));
        }

        if !options.is_empty() {
            self.builder.got_string(OPTIONS_KEY, options);
        }
        Ok(Parsed::Container(self.builder.object_done()))
    }
}
