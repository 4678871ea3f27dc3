//! Character cursor with one-character lookahead.
//!
//! The cursor tracks two byte offsets into the input: `position`, where the
//! current character starts, and `read_position`, where the next one starts.
//! Past the end of input both equal the input length and [`current`] is
//! `None`; advancing from there is a no-op.
//!
//! Offsets are byte offsets, but the cursor always moves by whole
//! characters, so every offset it reports is a valid `str` boundary.
//!
//! [`current`]: Cursor::current

/// Cursor over an in-memory source string.
///
/// The cursor is [`Copy`], enabling cheap state snapshots.
///
/// # Invariant
///
/// `read_position == position + current.len_utf8()` (or `position` when
/// `current` is `None`), and `current` is the character starting at
/// `position`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'src> {
    input: &'src str,
    position: usize,
    read_position: usize,
    current: Option<char>,
}

impl<'src> Cursor<'src> {
    /// Create a cursor positioned on the first character of `input`.
    pub fn new(input: &'src str) -> Self {
        let mut cursor = Self {
            input,
            position: 0,
            read_position: 0,
            current: None,
        };
        cursor.advance();
        cursor
    }

    /// The full source text.
    #[inline]
    pub fn input(&self) -> &'src str {
        self.input
    }

    /// Byte offset of the current character.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Byte offset of the character after the current one.
    #[inline]
    pub fn read_position(&self) -> usize {
        self.read_position
    }

    /// The character under the cursor, `None` past the end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// The character after the current one, without consuming anything.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.input
            .get(self.read_position..)
            .and_then(|rest| rest.chars().next())
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current.is_none()
    }

    /// Move to the next character.
    #[inline]
    pub fn advance(&mut self) {
        self.position = self.read_position;
        self.current = self
            .input
            .get(self.position..)
            .and_then(|rest| rest.chars().next());
        self.read_position = self.position + self.current.map_or(0, char::len_utf8);
    }

    /// Advance while `pred` holds for the current character.
    #[inline]
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while self.current.is_some_and(&mut pred) {
            self.advance();
        }
    }

    /// Skip spaces, tabs, newlines and carriage returns.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    /// Source text from `start` up to (not including) the current position.
    ///
    /// `start` must be an offset previously reported by [`position`](Self::position).
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.input[start..self.position]
    }
}

/// Whitespace separates tokens but never forms one.
#[inline]
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}
