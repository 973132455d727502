//! Token types produced by the lexer.
//!
//! Tokens are created once by the lexer and consumed read-only by the parser.
//! The raw lexeme is kept so literal conversion and diagnostics can refer to
//! the exact source text.

use crate::Position;
use std::fmt;

/// A token with its raw text and the position of its first character.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    #[cfg_attr(feature = "serde", serde(rename = "Type"))]
    pub kind: TokenKind,
    #[cfg_attr(feature = "serde", serde(rename = "Lexem"))]
    pub lexeme: String,
    #[cfg_attr(feature = "serde", serde(rename = "Position"))]
    pub position: Position,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: Position) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    /// The end-of-file sentinel at `position`.
    pub fn eof(position: Position) -> Self {
        Token::new(TokenKind::Eof, String::new(), position)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {}", self.kind, self.lexeme, self.position)
    }
}

/// Lexical category of a token.
///
/// Serializes as its variant name (`"LeftParen"`, `"Number"`, ...).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    // Punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Semicolon,

    // Operators
    Minus,
    Plus,
    Slash,
    Star,
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Else,
    False,
    For,
    Fun,
    If,
    Nil,
    Or,
    Print,
    Return,
    True,
    Var,
    While,

    // Trivia
    Comment,

    Eof,
}

impl TokenKind {
    /// Look up a keyword by its spelling.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "and" => TokenKind::And,
            "else" => TokenKind::Else,
            "false" => TokenKind::False,
            "for" => TokenKind::For,
            "fun" => TokenKind::Fun,
            "if" => TokenKind::If,
            "nil" => TokenKind::Nil,
            "or" => TokenKind::Or,
            "print" => TokenKind::Print,
            "return" => TokenKind::Return,
            "true" => TokenKind::True,
            "var" => TokenKind::Var,
            "while" => TokenKind::While,
            _ => return None,
        };
        Some(kind)
    }

    /// Human-readable description used in "expected X, found Y" messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "`(`",
            TokenKind::RightParen => "`)`",
            TokenKind::LeftBrace => "`{`",
            TokenKind::RightBrace => "`}`",
            TokenKind::Comma => "`,`",
            TokenKind::Dot => "`.`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Minus => "`-`",
            TokenKind::Plus => "`+`",
            TokenKind::Slash => "`/`",
            TokenKind::Star => "`*`",
            TokenKind::Bang => "`!`",
            TokenKind::BangEqual => "`!=`",
            TokenKind::Equal => "`=`",
            TokenKind::EqualEqual => "`==`",
            TokenKind::Greater => "`>`",
            TokenKind::GreaterEqual => "`>=`",
            TokenKind::Less => "`<`",
            TokenKind::LessEqual => "`<=`",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string literal",
            TokenKind::Number => "number literal",
            TokenKind::And => "`and`",
            TokenKind::Else => "`else`",
            TokenKind::False => "`false`",
            TokenKind::For => "`for`",
            TokenKind::Fun => "`fun`",
            TokenKind::If => "`if`",
            TokenKind::Nil => "`nil`",
            TokenKind::Or => "`or`",
            TokenKind::Print => "`print`",
            TokenKind::Return => "`return`",
            TokenKind::True => "`true`",
            TokenKind::Var => "`var`",
            TokenKind::While => "`while`",
            TokenKind::Comment => "comment",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests;
