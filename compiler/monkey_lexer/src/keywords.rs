//! Keyword resolution.
//!
//! The table is fixed at compile time: [`lookup`] is a `match` over the seven
//! reserved words, and [`KEYWORDS`] lists the same pairs for callers that
//! need to enumerate them. Nothing here is mutable, so the table is shared
//! freely between scanners and threads.

use crate::TokenKind;

/// Every reserved keyword and the kind it resolves to.
pub const KEYWORDS: [(&str, TokenKind); 7] = [
    ("fn", TokenKind::Function),
    ("let", TokenKind::Let),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("return", TokenKind::Return),
];

/// Look up a reserved keyword by text.
///
/// Returns `None` for anything that is not an exact, case-sensitive match.
/// Keywords are 2-6 bytes long, so other lengths are rejected without any
/// comparison.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    if !(2..=6).contains(&text.len()) {
        return None;
    }
    match text {
        "fn" => Some(TokenKind::Function),
        "let" => Some(TokenKind::Let),
        "true" => Some(TokenKind::True),
        "false" => Some(TokenKind::False),
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        "return" => Some(TokenKind::Return),
        _ => None,
    }
}

/// Resolve an identifier-shaped lexeme to its keyword kind, or
/// [`TokenKind::Ident`] if it is not reserved.
#[inline]
pub fn lookup_ident(text: &str) -> TokenKind {
    lookup(text).unwrap_or(TokenKind::Ident)
}

#[cfg(test)]
mod tests;
