//! Runtime errors.
//!
//! Operator helpers produce a bare `EvalErrorKind`; the interpreter attaches
//! the position of the expression being evaluated.

use quill_ir::{Operator, Position};

/// Why evaluation failed.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String },
    #[error("division by zero")]
    DivideByZero,
    #[error("`{name}` expects {expected} argument(s), got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    /// Operand tags contradict what the operator needs. The checker rules
    /// this out for concrete types; it is reachable through `Any`.
    #[error("cannot apply {} to {operands}", .op.name())]
    Downcast { op: Operator, operands: String },
    #[error("{type_name} value is not callable")]
    NotCallable { type_name: &'static str },
    #[error("maximum call depth of {depth} exceeded")]
    StackOverflow { depth: usize },
}

/// A runtime failure and where it happened.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("[{position}] runtime error: {kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub position: Position,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, position: Position) -> Self {
        EvalError { kind, position }
    }
}

pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

#[cold]
pub fn undefined_variable(name: &str) -> EvalErrorKind {
    EvalErrorKind::UndefinedVariable {
        name: name.to_owned(),
    }
}

#[cold]
pub fn division_by_zero() -> EvalErrorKind {
    EvalErrorKind::DivideByZero
}

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalErrorKind {
    EvalErrorKind::ArityMismatch {
        name: name.to_owned(),
        expected,
        got,
    }
}

#[cold]
pub fn unary_downcast(op: Operator, operand: &str) -> EvalErrorKind {
    EvalErrorKind::Downcast {
        op,
        operands: operand.to_owned(),
    }
}

#[cold]
pub fn binary_downcast(op: Operator, left: &str, right: &str) -> EvalErrorKind {
    EvalErrorKind::Downcast {
        op,
        operands: format!("{left} and {right}"),
    }
}

#[cold]
pub fn not_callable(type_name: &'static str) -> EvalErrorKind {
    EvalErrorKind::NotCallable { type_name }
}

#[cold]
pub fn stack_overflow(depth: usize) -> EvalErrorKind {
    EvalErrorKind::StackOverflow { depth }
}
