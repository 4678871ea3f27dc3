use super::*;

#[test]
fn reserved_keywords() {
    assert_eq!(lookup("fn"), Some(TokenKind::Function));
    assert_eq!(lookup("let"), Some(TokenKind::Let));
    assert_eq!(lookup("true"), Some(TokenKind::True));
    assert_eq!(lookup("false"), Some(TokenKind::False));
    assert_eq!(lookup("if"), Some(TokenKind::If));
    assert_eq!(lookup("else"), Some(TokenKind::Else));
    assert_eq!(lookup("return"), Some(TokenKind::Return));
}

#[test]
fn non_keywords() {
    assert_eq!(lookup("foobar"), None);
    assert_eq!(lookup("x"), None);
    assert_eq!(lookup(""), None);
    assert_eq!(lookup("function"), None);
    assert_eq!(lookup("returns"), None);
    assert_eq!(lookup("_let"), None);
}

#[test]
fn case_sensitive() {
    assert_eq!(lookup("Let"), None);
    assert_eq!(lookup("FN"), None);
    assert_eq!(lookup("True"), None);
    assert_eq!(lookup("RETURN"), None);
}

#[test]
fn lookup_ident_falls_back_to_ident() {
    assert_eq!(lookup_ident("let"), TokenKind::Let);
    assert_eq!(lookup_ident("add"), TokenKind::Ident);
    assert_eq!(lookup_ident("elsewhere"), TokenKind::Ident);
}

#[test]
fn table_agrees_with_lookup() {
    for (text, kind) in KEYWORDS {
        assert_eq!(lookup(text), Some(kind), "keyword {text:?}");
        assert_eq!(kind.fixed_lexeme(), Some(text));
        assert!(kind.is_keyword());
    }
}

#[test]
fn table_covers_every_keyword_kind() {
    let keyword_kinds = TokenKind::ALL.iter().filter(|k| k.is_keyword()).count();
    assert_eq!(KEYWORDS.len(), keyword_kinds);
}
