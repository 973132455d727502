//! Unary and binary operators.
//!
//! Operators are derived from tokens. The mapping is total over operator
//! tokens; every other token kind yields `NotAnOperator`, never a panic.

use crate::TokenKind;
use std::fmt;

/// An operator appearing in a `Unary` or `Binary` expression.
///
/// `Subtract` doubles as arithmetic negation in unary position; `Negate` is
/// logical negation (`!`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operator {
    Negate,
    Add,
    Subtract,
    Multiply,
    Divide,
    And,
    Or,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Operator {
    /// Source spelling of the operator.
    pub const fn lexeme(self) -> &'static str {
        match self {
            Self::Negate => "!",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::And => "and",
            Self::Or => "or",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
        }
    }

    /// Operator name used in diagnostics (`add`, `not-equal`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Negate => "negate",
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::And => "and",
            Self::Or => "or",
            Self::Equal => "equal",
            Self::NotEqual => "not-equal",
            Self::Less => "less",
            Self::LessEqual => "less-or-equal",
            Self::Greater => "greater",
            Self::GreaterEqual => "greater-or-equal",
        }
    }

    /// `<`, `<=`, `>`, `>=`.
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Less | Self::LessEqual | Self::Greater | Self::GreaterEqual
        )
    }

    /// `==`, `!=`.
    pub const fn is_equality(self) -> bool {
        matches!(self, Self::Equal | Self::NotEqual)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme())
    }
}

/// The token kind has no operator meaning.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct NotAnOperator(pub TokenKind);

impl fmt::Display for NotAnOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not an operator", self.0)
    }
}

impl std::error::Error for NotAnOperator {}

impl TryFrom<TokenKind> for Operator {
    type Error = NotAnOperator;

    fn try_from(kind: TokenKind) -> Result<Self, Self::Error> {
        let op = match kind {
            TokenKind::Bang => Operator::Negate,
            TokenKind::Plus => Operator::Add,
            TokenKind::Minus => Operator::Subtract,
            TokenKind::Star => Operator::Multiply,
            TokenKind::Slash => Operator::Divide,
            TokenKind::And => Operator::And,
            TokenKind::Or => Operator::Or,
            TokenKind::EqualEqual => Operator::Equal,
            TokenKind::BangEqual => Operator::NotEqual,
            TokenKind::Less => Operator::Less,
            TokenKind::LessEqual => Operator::LessEqual,
            TokenKind::Greater => Operator::Greater,
            TokenKind::GreaterEqual => Operator::GreaterEqual,
            other => return Err(NotAnOperator(other)),
        };
        Ok(op)
    }
}
