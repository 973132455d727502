//! Token cursor for navigating the token stream.
//!
//! Comment tokens are invisible to the grammar: the cursor steps over them
//! whenever it moves. Reading past the end yields an `Eof` token, so a
//! stream missing its sentinel still terminates.

use quill_ir::{Position, Token, TokenKind};

use crate::{ParseError, ParseErrorKind};

pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    eof: Token,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let eof_position = tokens.last().map_or(Position::START, |t| t.position);
        let mut cursor = Cursor {
            tokens,
            pos: 0,
            eof: Token::eof(eof_position),
        };
        cursor.skip_comments();
        cursor
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_position(&self) -> Position {
        self.current().position
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Advance and return the consumed token. Never moves past `Eof`.
    pub fn advance(&mut self) -> &'a Token {
        let current = self.pos;
        if current < self.tokens.len() && !self.is_at_end() {
            self.pos += 1;
            self.skip_comments();
        }
        match self.tokens.get(current) {
            Some(token) => token,
            None => self.tokens.last().unwrap_or(&EOF_FALLBACK),
        }
    }

    /// Consume the current token if it is `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect the current token to be of the given kind, advance and return it.
    #[inline]
    pub fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(kind))
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_error(&self, expected: TokenKind) -> ParseError {
        ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected,
                found: self.current_kind(),
            },
            self.current_position(),
        )
    }

    /// Expect an identifier and return its name.
    pub fn expect_ident(&mut self) -> Result<&'a str, ParseError> {
        self.expect(TokenKind::Identifier)
            .map(|token| token.lexeme.as_str())
    }

    fn skip_comments(&mut self) {
        while self
            .tokens
            .get(self.pos)
            .is_some_and(|t| t.kind == TokenKind::Comment)
        {
            self.pos += 1;
        }
    }
}

/// Returned by `advance` on an empty stream.
static EOF_FALLBACK: Token = Token {
    kind: TokenKind::Eof,
    lexeme: String::new(),
    position: Position::START,
};
