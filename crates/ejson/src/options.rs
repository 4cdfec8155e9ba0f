/// Configuration options for [`Parser`](crate::Parser).
///
/// # Examples
///
/// ```rust
/// use ejson::{Parser, ParserOptions};
///
/// let parser = Parser::new(ParserOptions {
///     max_depth: 16,
///     max_input_len: Some(64 * 1024),
///     ..Default::default()
/// });
/// assert!(parser.parse("{a: [1, 2]}").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum number of containers (objects and arrays) that may be open at
    /// once. Deeper input fails with
    /// [`ErrorKind::DepthLimitExceeded`](crate::ErrorKind::DepthLimitExceeded)
    /// instead of growing the stack.
    ///
    /// # Default
    ///
    /// `256`
    pub max_depth: usize,

    /// Maximum input length in bytes, checked before parsing starts.
    ///
    /// # Default
    ///
    /// `None` (unbounded)
    pub max_input_len: Option<usize>,

    /// Whether to stop after the first complete value and ignore whatever
    /// follows it.
    ///
    /// When `false`, anything other than whitespace after the root value is
    /// rejected with
    /// [`ErrorKind::TrailingCharacters`](crate::ErrorKind::TrailingCharacters).
    ///
    /// # Default
    ///
    /// `false`
    pub allow_trailing_characters: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: 256,
            max_input_len: None,
            allow_trailing_characters: false,
        }
    }
}
