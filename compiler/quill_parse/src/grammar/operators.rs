//! Operator matching helpers.

use quill_ir::{Operator, TokenKind};

use crate::Parser;

impl Parser<'_> {
    pub(crate) fn match_equality_op(&self) -> Option<Operator> {
        match self.cursor.current_kind() {
            TokenKind::EqualEqual => Some(Operator::Equal),
            TokenKind::BangEqual => Some(Operator::NotEqual),
            _ => None,
        }
    }

    pub(crate) fn match_comparison_op(&self) -> Option<Operator> {
        match self.cursor.current_kind() {
            TokenKind::Less => Some(Operator::Less),
            TokenKind::LessEqual => Some(Operator::LessEqual),
            TokenKind::Greater => Some(Operator::Greater),
            TokenKind::GreaterEqual => Some(Operator::GreaterEqual),
            _ => None,
        }
    }

    pub(crate) fn match_term_op(&self) -> Option<Operator> {
        match self.cursor.current_kind() {
            TokenKind::Plus => Some(Operator::Add),
            TokenKind::Minus => Some(Operator::Subtract),
            _ => None,
        }
    }

    pub(crate) fn match_factor_op(&self) -> Option<Operator> {
        match self.cursor.current_kind() {
            TokenKind::Star => Some(Operator::Multiply),
            TokenKind::Slash => Some(Operator::Divide),
            _ => None,
        }
    }

    pub(crate) fn match_unary_op(&self) -> Option<Operator> {
        match self.cursor.current_kind() {
            TokenKind::Bang => Some(Operator::Negate),
            TokenKind::Minus => Some(Operator::Subtract),
            _ => None,
        }
    }
}
