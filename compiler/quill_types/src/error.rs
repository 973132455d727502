//! Type errors.

use quill_ir::{Operator, Position, Type};

/// Why a construct is ill-typed.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum TypeErrorKind {
    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String },
    #[error("invalid operand type for {}: {operand}", .op.name())]
    InvalidUnaryOperatorForType { op: Operator, operand: Type },
    #[error("invalid operand types for {}: {left} and {right}", .op.name())]
    InvalidBinaryOperatorForType {
        op: Operator,
        left: Type,
        right: Type,
    },
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: Type, found: Type },
}

/// A type error and where it happened.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("[{position}] type error: {kind}")]
pub struct TypeError {
    pub kind: TypeErrorKind,
    pub position: Position,
}

impl TypeError {
    #[cold]
    pub fn undefined_variable(name: &str, position: Position) -> Self {
        TypeError {
            kind: TypeErrorKind::UndefinedVariable {
                name: name.to_owned(),
            },
            position,
        }
    }

    #[cold]
    pub fn invalid_unary(op: Operator, operand: Type, position: Position) -> Self {
        TypeError {
            kind: TypeErrorKind::InvalidUnaryOperatorForType { op, operand },
            position,
        }
    }

    #[cold]
    pub fn invalid_binary(op: Operator, left: Type, right: Type, position: Position) -> Self {
        TypeError {
            kind: TypeErrorKind::InvalidBinaryOperatorForType { op, left, right },
            position,
        }
    }

    #[cold]
    pub fn mismatch(expected: Type, found: Type, position: Position) -> Self {
        TypeError {
            kind: TypeErrorKind::TypeMismatch { expected, found },
            position,
        }
    }
}
