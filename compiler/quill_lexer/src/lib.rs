//! Lexer for Quill using logos.
//!
//! Produces a `Vec<Token>` that always ends with exactly one `Eof` token.
//! Each token keeps its raw lexeme and the position of its first character.

mod lex_error;

use logos::Logos;
use quill_ir::{LineOffsetTable, Token, TokenKind};

pub use lex_error::{LexError, LexErrorKind};

/// Lexer configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Emit `//` comments as `Comment` tokens instead of dropping them.
    pub keep_comments: bool,
}

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(";")]
    Semicolon,

    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token("/")]
    Slash,
    #[token("*")]
    Star,
    #[token("!=")]
    BangEq,
    #[token("!")]
    Bang,
    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,
    #[token(">=")]
    GtEq,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token("<")]
    Lt,

    // Strings may span lines; there are no escapes.
    #[regex(r#""[^"]*""#)]
    String,

    // Opening quote with no closing quote before end of input.
    #[regex(r#""[^"]*"#)]
    UnterminatedString,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    // Keywords are classified after matching.
    #[regex(r"[A-Za-z_]+")]
    Word,
}

/// Lex `source` with default options.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    lex_with(source, LexOptions::default())
}

/// Lex `source`, stopping at the first error.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex_with(source: &str, options: LexOptions) -> Result<Vec<Token>, LexError> {
    let table = LineOffsetTable::build(source);
    let mut cursor = table.cursor(source);
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let start = logos.span().start;
        let position = cursor.position(start);

        let raw = match token_result {
            Ok(raw) => raw,
            Err(()) => {
                let ch = source
                    .get(start..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or('\u{fffd}');
                return Err(LexError::unexpected_character(ch, position));
            }
        };

        let slice = logos.slice();

        let kind = match raw {
            RawToken::LineComment if !options.keep_comments => continue,
            RawToken::UnterminatedString => return Err(LexError::unterminated_string(position)),
            _ => convert_token(raw, slice),
        };
        tokens.push(Token::new(kind, slice, position));
    }

    tokens.push(Token::eof(cursor.position(source.len())));
    tracing::trace!(count = tokens.len(), "lexed");
    Ok(tokens)
}

/// Convert a raw token to a `TokenKind`.
fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::LineComment => TokenKind::Comment,

        RawToken::LParen => TokenKind::LeftParen,
        RawToken::RParen => TokenKind::RightParen,
        RawToken::LBrace => TokenKind::LeftBrace,
        RawToken::RBrace => TokenKind::RightBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Semicolon => TokenKind::Semicolon,

        RawToken::Minus => TokenKind::Minus,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Star => TokenKind::Star,
        RawToken::BangEq => TokenKind::BangEqual,
        RawToken::Bang => TokenKind::Bang,
        RawToken::EqEq => TokenKind::EqualEqual,
        RawToken::Eq => TokenKind::Equal,
        RawToken::GtEq => TokenKind::GreaterEqual,
        RawToken::Gt => TokenKind::Greater,
        RawToken::LtEq => TokenKind::LessEqual,
        RawToken::Lt => TokenKind::Less,

        // Unterminated strings are rejected before conversion.
        RawToken::String | RawToken::UnterminatedString => TokenKind::String,
        RawToken::Number => TokenKind::Number,
        RawToken::Word => TokenKind::keyword(slice).unwrap_or(TokenKind::Identifier),
    }
}
