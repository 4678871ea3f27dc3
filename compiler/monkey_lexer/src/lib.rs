//! Lexer for the Monkey scripting language.
//!
//! Converts in-memory source text into a linear stream of [`Token`]s.
//! There is no parser here: consumers pull tokens through
//! [`Scanner::next_token`] (or the [`Iterator`] impl) until they see
//! [`TokenKind::Eof`].
//!
//! ```
//! use monkey_lexer::{tokenize, TokenKind};
//!
//! let kinds: Vec<TokenKind> = tokenize("let x = 5;").iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Let,
//!         TokenKind::Ident,
//!         TokenKind::Assign,
//!         TokenKind::Int,
//!         TokenKind::Semicolon,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```
//!
//! # Illegal characters
//!
//! Anything outside the language's character classes becomes a
//! [`TokenKind::Illegal`] token whose text is the fixed placeholder
//! [`Token::ILLEGAL_TEXT`]. The token's [`Span`] still points at the
//! offending character.

mod cursor;
pub mod keywords;
mod scanner;
mod span;
mod token;

pub use cursor::{is_whitespace, Cursor};
pub use scanner::{is_digit, is_letter, Scanner};
pub use span::Span;
pub use token::{Token, TokenKind};

/// Scan `source` to completion.
///
/// The returned stream always ends with exactly one [`TokenKind::Eof`].
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Scanner::new(source).collect()
}
