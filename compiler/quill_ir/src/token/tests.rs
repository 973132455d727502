use super::*;

#[test]
fn test_keyword_lookup() {
    assert_eq!(TokenKind::keyword("while"), Some(TokenKind::While));
    assert_eq!(TokenKind::keyword("nil"), Some(TokenKind::Nil));
    assert_eq!(TokenKind::keyword("While"), None);
    assert_eq!(TokenKind::keyword("whilst"), None);
}

#[test]
fn test_every_keyword_round_trips() {
    for word in [
        "and", "else", "false", "for", "fun", "if", "nil", "or", "print", "return", "true",
        "var", "while",
    ] {
        let Some(kind) = TokenKind::keyword(word) else {
            panic!("`{word}` should be a keyword");
        };
        assert_eq!(kind.display_name(), format!("`{word}`"));
    }
}

#[test]
fn test_non_keywords() {
    assert_eq!(TokenKind::keyword("print_"), None);
    assert_eq!(TokenKind::keyword("_"), None);
    assert_eq!(TokenKind::keyword(""), None);
}

#[test]
fn test_eof_token() {
    let eof = Token::eof(Position::new(2, 5));
    assert_eq!(eof.kind, TokenKind::Eof);
    assert!(eof.lexeme.is_empty());
    assert_eq!(eof.position, Position::new(2, 5));
}

#[test]
fn test_token_debug() {
    let token = Token::new(TokenKind::Number, "4.5", Position::new(1, 3));
    assert_eq!(format!("{token:?}"), "Number \"4.5\" @ 1:3");
}

#[cfg(feature = "serde")]
#[test]
fn test_token_json_shape() {
    let token = Token::new(TokenKind::LeftParen, "(", Position::new(1, 2));
    let json = serde_json::to_string(&token).unwrap_or_default();
    assert_eq!(
        json,
        r#"{"Type":"LeftParen","Lexem":"(","Position":{"Line":1,"Column":2}}"#
    );
}
