//! Lexer errors.

use quill_ir::Position;

/// What went wrong while lexing.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// End of input reached before the closing `"`.
    #[error("unterminated string")]
    UnterminatedString,
    /// A character that starts no token.
    #[error("unexpected character `{0}`")]
    UnexpectedCharacter(char),
}

/// A lexer failure and where it happened.
///
/// For `UnterminatedString` the position is that of the opening quote.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("[{position}] lex error: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: Position,
}

impl LexError {
    #[cold]
    pub fn unterminated_string(position: Position) -> Self {
        LexError {
            kind: LexErrorKind::UnterminatedString,
            position,
        }
    }

    #[cold]
    pub fn unexpected_character(ch: char, position: Position) -> Self {
        LexError {
            kind: LexErrorKind::UnexpectedCharacter(ch),
            position,
        }
    }
}
