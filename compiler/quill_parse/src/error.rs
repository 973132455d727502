//! Parse errors.

use quill_ir::{Position, TokenKind};

/// Maximum number of parameters a function may declare, and arguments a
/// call may pass.
pub const MAX_ARITY: usize = 255;

/// What went wrong while parsing.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    /// A specific token was required.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    /// An expression was required but the token starts none.
    #[error("expected expression, found {found}")]
    MissingTerminal { found: TokenKind },
    /// A number token whose text is not a valid number.
    #[error("invalid number literal `{lexeme}`")]
    NumberConversion { lexeme: String },
    /// Left side of `=` is not a variable.
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,
    /// `return` at top level.
    #[error("`return` outside of a function")]
    ReturnOutsideFunction,
    #[error("a function cannot have more than {MAX_ARITY} parameters")]
    TooManyParameters,
    #[error("a call cannot pass more than {MAX_ARITY} arguments")]
    TooManyArguments,
}

/// A parser failure and where it happened.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("[{position}] syntax error: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: Position,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, position: Position) -> Self {
        ParseError { kind, position }
    }
}
