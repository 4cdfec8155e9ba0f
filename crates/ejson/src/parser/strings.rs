use alloc::{borrow::Cow, string::String};

use super::Reader;
use crate::{
    builder::Builder,
    cursor::Cursor,
    error::{ErrorKind, Expected, ParseError},
    escape_buffer::{UnicodeEscapeBuffer, combine_surrogates, is_high_surrogate},
};

impl<'src, B: Builder> Reader<'src, '_, B> {
    /// Parses a quoted string, or an unquoted object key when `need_quote`
    /// is `false` and no quote is present.
    ///
    /// Unquoted text ends at `:` or whitespace.
    pub(super) fn parse_string(&mut self, need_quote: bool) -> Result<Cow<'src, str>, ParseError> {
        let quote = match self.cursor.peek() {
            Some(q @ ('\'' | '"')) => Some(q),
            found if need_quote => return Err(self.cursor.unexpected(Expected::Quote, found)),
            _ => None,
        };

        let Some(quote) = quote else {
            return scan_text(&mut self.cursor, |c| c == ':' || c.is_whitespace());
        };

        let open = self.cursor.position();
        self.cursor.bump();
        let text = scan_text(&mut self.cursor, |c| c == quote)?;
        if self.cursor.bump() != Some(quote) {
            return Err(self.cursor.error_at(open, ErrorKind::UnterminatedString));
        }
        Ok(text)
    }
}

/// Reads literal text up to, not including, the first unescaped character
/// for which `stop` holds, or to the end of input.
///
/// Text without escapes is borrowed from the input.
pub(super) fn scan_text<'src>(
    cursor: &mut Cursor<'src>,
    stop: impl Fn(char) -> bool,
) -> Result<Cow<'src, str>, ParseError> {
    let mut decoded: Option<String> = None;
    let mut run_start = cursor.position();

    while let Some(c) = cursor.peek_raw() {
        if stop(c) {
            break;
        }
        if c == '\\' {
            let buf = decoded.get_or_insert_with(String::new);
            buf.push_str(cursor.slice(run_start, cursor.position()));
            cursor.bump();
            decode_escape(cursor, buf)?;
            run_start = cursor.position();
            continue;
        }
        cursor.bump();
    }

    let tail = cursor.slice(run_start, cursor.position());
    Ok(match decoded {
        None => Cow::Borrowed(tail),
        Some(mut buf) => {
            buf.push_str(tail);
            Cow::Owned(buf)
        }
    })
}

/// Decodes the escape following a backslash the cursor has just passed.
///
/// Characters without a special meaning stand for themselves.
fn decode_escape(cursor: &mut Cursor<'_>, out: &mut String) -> Result<(), ParseError> {
    let backslash = cursor.position() - 1;
    let Some(c) = cursor.bump() else {
        return Err(cursor.unexpected(Expected::EscapeSequence, None));
    };
    match c {
        'n' => out.push('\n'),
        'r' => out.push('\r'),
        't' => out.push('\t'),
        'b' => out.push('\u{8}'),
        'u' => out.push(decode_unicode(cursor, backslash)?),
        other => out.push(other),
    }
    Ok(())
}

/// Decodes the digits of a `\u` escape, pairing a high surrogate with the
/// low-surrogate escape that must follow it.
fn decode_unicode(cursor: &mut Cursor<'_>, backslash: usize) -> Result<char, ParseError> {
    let unit = read_code_unit(cursor)?;
    if is_high_surrogate(unit) && cursor.rest().starts_with("\\u") {
        cursor.bump();
        cursor.bump();
        let low = read_code_unit(cursor)?;
        return combine_surrogates(unit, low)
            .ok_or_else(|| cursor.error_at(backslash, ErrorKind::InvalidUnicodeEscape(unit)));
    }
    char::from_u32(u32::from(unit))
        .ok_or_else(|| cursor.error_at(backslash, ErrorKind::InvalidUnicodeEscape(unit)))
}

fn read_code_unit(cursor: &mut Cursor<'_>) -> Result<u16, ParseError> {
    let mut buf = UnicodeEscapeBuffer::new();
    loop {
        let nibble = cursor.read_hex_digit()?;
        if let Some(unit) = buf.feed(nibble) {
            return Ok(unit);
        }
    }
}
