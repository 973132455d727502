//! Pipeline errors.

use std::fmt;

use quill_eval::EvalError;
use quill_ir::Position;
use quill_lexer::LexError;
use quill_parse::ParseError;
use quill_types::TypeError;

/// The first error of whichever phase failed.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] ParseError),
    #[error(transparent)]
    Type(#[from] TypeError),
    #[error(transparent)]
    Runtime(#[from] EvalError),
}

/// Pipeline phase, in execution order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Phase {
    Lex,
    Syntax,
    Type,
    Runtime,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Lex => "lex",
            Phase::Syntax => "syntax",
            Phase::Type => "type",
            Phase::Runtime => "runtime",
        })
    }
}

impl Error {
    pub fn phase(&self) -> Phase {
        match self {
            Error::Lex(_) => Phase::Lex,
            Error::Syntax(_) => Phase::Syntax,
            Error::Type(_) => Phase::Type,
            Error::Runtime(_) => Phase::Runtime,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Error::Lex(err) => err.position,
            Error::Syntax(err) => err.position,
            Error::Type(err) => err.position,
            Error::Runtime(err) => err.position,
        }
    }
}
