//! Hand-written scanner producing one [`Token`] per call.
//!
//! # Design
//!
//! Each call skips whitespace, then dispatches on the current character:
//! end of input, recognized punctuation, a letter run, a digit run, and
//! finally a single illegal character. Each arm calls a focused method that
//! advances the cursor exactly past the lexeme it recognized.
//!
//! Unrecognized characters never stop the scan. They become
//! [`TokenKind::Illegal`] tokens and scanning resumes at the next character;
//! whether that is fatal is up to the caller.

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::keywords;
use crate::{Span, Token, TokenKind};

/// Identifier characters: ASCII letters and underscore.
///
/// Digits are excluded, even after the first character, so
/// `x1` scans as `x` followed by `1`.
#[inline]
pub const fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Pull-based scanner over an in-memory source string.
///
/// Call [`next_token`](Self::next_token) until it returns
/// [`TokenKind::Eof`]; further calls keep returning `Eof`. The scanner is
/// also an [`Iterator`] that yields the `Eof` token once and then stops.
#[derive(Clone, Debug)]
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    /// Set once the iterator has yielded `Eof`.
    finished: bool,
}

impl<'src> Scanner<'src> {
    /// Create a scanner positioned on the first character of `input`.
    pub fn new(input: &'src str) -> Self {
        Self {
            cursor: Cursor::new(input),
            finished: false,
        }
    }

    /// Byte offset where the next call starts scanning (before whitespace).
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> Token<'src> {
        self.cursor.eat_whitespace();
        let start = self.cursor.position();

        let token = match self.cursor.current() {
            None => Self::eof(start),
            Some('=') => self.one_or_two(start, TokenKind::Assign, TokenKind::Eq),
            Some('!') => self.one_or_two(start, TokenKind::Bang, TokenKind::NotEq),
            Some(';') => self.single(start, TokenKind::Semicolon),
            Some('(') => self.single(start, TokenKind::LeftParen),
            Some(')') => self.single(start, TokenKind::RightParen),
            Some(',') => self.single(start, TokenKind::Comma),
            Some('+') => self.single(start, TokenKind::Plus),
            Some('{') => self.single(start, TokenKind::LeftBrace),
            Some('}') => self.single(start, TokenKind::RightBrace),
            Some('-') => self.single(start, TokenKind::Minus),
            Some('*') => self.single(start, TokenKind::Asterisk),
            Some('/') => self.single(start, TokenKind::Slash),
            Some('<') => self.single(start, TokenKind::LessThan),
            Some('>') => self.single(start, TokenKind::GreaterThan),
            Some(c) if is_letter(c) => self.identifier(start),
            Some(c) if is_digit(c) => self.number(start),
            Some(c) => self.illegal(start, c),
        };

        trace!(kind = %token.kind, text = token.text, range = %token.span, "token");
        token
    }

    // ─── EOF ─────────────────────────────────────────────────────────

    /// Nothing is consumed, so repeated calls keep landing here.
    fn eof(start: usize) -> Token<'src> {
        Token::new(TokenKind::Eof, Token::EOF_TEXT, Span::point(start))
    }

    // ─── Punctuation ─────────────────────────────────────────────────

    fn single(&mut self, start: usize, kind: TokenKind) -> Token<'src> {
        self.cursor.advance();
        self.lexeme(start, kind)
    }

    /// `=`/`==` and `!`/`!=`: the two-character form wins when the next
    /// character is `=`.
    fn one_or_two(&mut self, start: usize, one: TokenKind, two: TokenKind) -> Token<'src> {
        if self.cursor.peek() == Some('=') {
            self.cursor.advance();
            self.cursor.advance();
            self.lexeme(start, two)
        } else {
            self.cursor.advance();
            self.lexeme(start, one)
        }
    }

    // ─── Identifiers & literals ──────────────────────────────────────

    fn identifier(&mut self, start: usize) -> Token<'src> {
        self.cursor.eat_while(is_letter);
        let text = self.cursor.slice_from(start);
        Token::new(
            keywords::lookup_ident(text),
            text,
            Span::new(start, self.cursor.position()),
        )
    }

    /// Unsigned base-10 digit run of any length; range checks belong to
    /// whoever converts the text to a number.
    fn number(&mut self, start: usize) -> Token<'src> {
        self.cursor.eat_while(is_digit);
        self.lexeme(start, TokenKind::Int)
    }

    // ─── Errors ──────────────────────────────────────────────────────

    fn illegal(&mut self, start: usize, c: char) -> Token<'src> {
        debug!(ch = ?c, offset = start, "illegal character");
        self.cursor.advance();
        Token::new(
            TokenKind::Illegal,
            Token::ILLEGAL_TEXT,
            Span::new(start, self.cursor.position()),
        )
    }

    /// Token whose text is the source from `start` to the cursor.
    #[inline]
    fn lexeme(&self, start: usize, kind: TokenKind) -> Token<'src> {
        Token::new(
            kind,
            self.cursor.slice_from(start),
            Span::new(start, self.cursor.position()),
        )
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}
