use super::Reader;
use crate::{
    builder::{Builder, Leaf},
    error::{ErrorKind, ParseError},
};

impl<'src, B: Builder> Reader<'src, '_, B> {
    /// Captures a `function (...) { ... }` literal verbatim.
    ///
    /// The header runs up to the first `{`; the body ends where the braces
    /// balance again. Nothing inside is interpreted, so braces in string
    /// literals or comments of the function source count too.
    pub(super) fn parse_function(&mut self) -> Result<Leaf<'src>, ParseError> {
        self.cursor.skip_whitespace();
        let start = self.cursor.position();
        self.cursor.expect_keyword("function")?;

        loop {
            match self.cursor.bump() {
                Some('{') => break,
                Some(_) => {}
                None => return Err(self.cursor.error_at(start, ErrorKind::UnterminatedFunction)),
            }
        }

        let mut depth = 1usize;
        while depth > 0 {
            match self.cursor.bump() {
                Some('{') => depth += 1,
                Some('}') => depth -= 1,
                Some(_) => {}
                None => return Err(self.cursor.error_at(start, ErrorKind::UnterminatedFunction)),
            }
        }

        Ok(Leaf::Function(
            self.cursor.slice(start, self.cursor.position()),
        ))
    }
}
