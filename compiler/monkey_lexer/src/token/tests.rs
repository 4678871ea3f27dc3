use super::*;

// === Names ===

#[test]
fn word_kinds_have_upper_case_names() {
    assert_eq!(TokenKind::Eof.name(), "EOF");
    assert_eq!(TokenKind::Illegal.name(), "ILLEGAL");
    assert_eq!(TokenKind::Ident.name(), "IDENT");
    assert_eq!(TokenKind::Int.name(), "INT");
    assert_eq!(TokenKind::Function.name(), "FUNCTION");
    assert_eq!(TokenKind::Return.name(), "RETURN");
}

#[test]
fn punctuation_is_named_by_symbol() {
    assert_eq!(TokenKind::Assign.name(), "=");
    assert_eq!(TokenKind::Eq.name(), "==");
    assert_eq!(TokenKind::NotEq.name(), "!=");
    assert_eq!(TokenKind::LeftBrace.name(), "{");
    assert_eq!(TokenKind::RightBrace.name(), "}");
}

#[test]
fn names_are_unique() {
    let mut names: Vec<&str> = TokenKind::ALL.iter().map(|k| k.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), TokenKind::ALL.len());
}

#[test]
fn display_uses_name() {
    assert_eq!(TokenKind::Let.to_string(), "LET");
    assert_eq!(TokenKind::Slash.to_string(), "/");
}

// === Fixed lexemes ===

#[test]
fn variable_kinds_have_no_fixed_lexeme() {
    assert_eq!(TokenKind::Eof.fixed_lexeme(), None);
    assert_eq!(TokenKind::Illegal.fixed_lexeme(), None);
    assert_eq!(TokenKind::Ident.fixed_lexeme(), None);
    assert_eq!(TokenKind::Int.fixed_lexeme(), None);
}

#[test]
fn keyword_lexemes_are_source_spelling() {
    assert_eq!(TokenKind::Function.fixed_lexeme(), Some("fn"));
    assert_eq!(TokenKind::Let.fixed_lexeme(), Some("let"));
    assert_eq!(TokenKind::Else.fixed_lexeme(), Some("else"));
}

#[test]
fn punctuation_lexeme_matches_name() {
    let punctuation = TokenKind::ALL.into_iter().filter(|k| {
        !k.is_keyword() && !k.is_sentinel() && !matches!(k, TokenKind::Ident | TokenKind::Int)
    });
    for kind in punctuation {
        assert_eq!(kind.fixed_lexeme(), Some(kind.name()), "{kind:?}");
    }
}

// === Classification helpers ===

#[test]
fn keyword_kinds() {
    let keywords: Vec<TokenKind> = TokenKind::ALL
        .into_iter()
        .filter(|k| k.is_keyword())
        .collect();
    assert_eq!(
        keywords,
        vec![
            TokenKind::Function,
            TokenKind::Let,
            TokenKind::True,
            TokenKind::False,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Return,
        ]
    );
}

#[test]
fn sentinel_kinds() {
    assert!(TokenKind::Eof.is_sentinel());
    assert!(TokenKind::Illegal.is_sentinel());
    assert!(!TokenKind::Ident.is_sentinel());
}

#[test]
fn kind_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

// === Token ===

#[test]
fn structured_display() {
    let tok = Token::new(TokenKind::Let, "let", Span::new(0, 3));
    assert_eq!(tok.to_string(), "{Type:LET Literal:let}");

    let eof = Token::new(TokenKind::Eof, Token::EOF_TEXT, Span::point(3));
    assert_eq!(eof.to_string(), "{Type:EOF Literal:eof}");
}

#[test]
fn token_predicates() {
    let eof = Token::new(TokenKind::Eof, Token::EOF_TEXT, Span::point(0));
    let bad = Token::new(TokenKind::Illegal, Token::ILLEGAL_TEXT, Span::new(0, 1));
    assert!(eof.is_eof());
    assert!(!eof.is_illegal());
    assert!(bad.is_illegal());
    assert!(!bad.is_eof());
}
