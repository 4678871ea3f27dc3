//! Token kinds and the token value produced by the scanner.
//!
//! [`TokenKind`] is a closed set: every byte of input is classified into one
//! of these kinds. Each kind carries a stable [`name`](TokenKind::name) used
//! by the driver's structured output (`{Type:LET Literal:let}`).

use std::fmt;

use crate::Span;

/// Lexical category of a token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // Special
    Eof,
    Illegal,

    // Identifiers & literals
    Ident,
    Int,

    // Operators
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,
    LessThan,
    GreaterThan,
    Eq,
    NotEq,

    // Delimiters
    Comma,
    Semicolon,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    /// Every token kind, in declaration order.
    pub const ALL: [TokenKind; 27] = [
        TokenKind::Eof,
        TokenKind::Illegal,
        TokenKind::Ident,
        TokenKind::Int,
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Bang,
        TokenKind::Asterisk,
        TokenKind::Slash,
        TokenKind::LessThan,
        TokenKind::GreaterThan,
        TokenKind::Eq,
        TokenKind::NotEq,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::Function,
        TokenKind::Let,
        TokenKind::True,
        TokenKind::False,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Return,
    ];

    /// Stable type name of this kind.
    ///
    /// Operators and delimiters are named by their symbol; every other kind
    /// by an upper-case word.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::LessThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
        }
    }

    /// The exact source text of kinds that always have the same lexeme.
    ///
    /// Returns `None` for identifiers, integers, and the two sentinel kinds.
    pub const fn fixed_lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Eof | TokenKind::Illegal | TokenKind::Ident | TokenKind::Int => None,
            TokenKind::Function => Some("fn"),
            TokenKind::Let => Some("let"),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            TokenKind::Return => Some("return"),
            punct => Some(punct.name()),
        }
    }

    /// Check if this kind is a reserved keyword.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
        )
    }

    /// Check if this kind carries a fixed sentinel text instead of source text.
    pub const fn is_sentinel(self) -> bool {
        matches!(self, TokenKind::Eof | TokenKind::Illegal)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme.
///
/// `text` borrows from the scanned input, except for the two sentinel kinds:
/// [`TokenKind::Eof`] always carries [`Token::EOF_TEXT`] and
/// [`TokenKind::Illegal`] always carries [`Token::ILLEGAL_TEXT`]. The span of
/// an illegal token still covers the offending character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    /// Text of the end-of-input token.
    pub const EOF_TEXT: &'static str = "eof";

    /// Text of every illegal token, regardless of the character found.
    pub const ILLEGAL_TEXT: &'static str = "Illegal";

    #[inline]
    pub const fn new(kind: TokenKind, text: &'src str, span: Span) -> Self {
        Token { kind, text, span }
    }

    #[inline]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    #[inline]
    pub const fn is_illegal(&self) -> bool {
        matches!(self.kind, TokenKind::Illegal)
    }
}

/// Structured form: `{Type:LET Literal:let}`.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Type:{} Literal:{}}}", self.kind, self.text)
    }
}

#[cfg(test)]
mod tests;
