//! Expression nodes.

use std::cell::Cell;
use std::fmt;

use crate::{Operator, Position, Type};

/// Expression node.
///
/// `ty` starts empty and is filled in once by the type checker.
#[derive(Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub position: Position,
    ty: Cell<Option<Type>>,
}

impl Expr {
    pub fn new(kind: ExprKind, position: Position) -> Self {
        Expr {
            kind,
            position,
            ty: Cell::new(None),
        }
    }

    /// The `nil` literal used for `var x;` without an initializer.
    pub fn nil(position: Position) -> Self {
        Expr::new(ExprKind::Nil, position)
    }

    /// Type recorded by the checker, if this node has been checked.
    #[inline]
    pub fn ty(&self) -> Option<Type> {
        self.ty.get()
    }

    #[inline]
    pub fn set_ty(&self, ty: Type) {
        self.ty.set(Some(ty));
    }

    /// Structural equality ignoring positions and recorded types.
    pub fn same_shape(&self, other: &Expr) -> bool {
        use ExprKind::{
            Assign, Binary, Boolean, Call, Grouping, Nil, Number, String, Unary, Variable,
        };

        match (&self.kind, &other.kind) {
            (Number(a), Number(b)) => a.to_bits() == b.to_bits(),
            (String(a), String(b)) => a == b,
            (Boolean(a), Boolean(b)) => a == b,
            (Nil, Nil) => true,
            (
                Unary { op, operand },
                Unary {
                    op: other_op,
                    operand: other_operand,
                },
            ) => op == other_op && operand.same_shape(other_operand),
            (
                Binary { op, left, right },
                Binary {
                    op: other_op,
                    left: other_left,
                    right: other_right,
                },
            ) => op == other_op && left.same_shape(other_left) && right.same_shape(other_right),
            (Grouping(a), Grouping(b)) => a.same_shape(b),
            (Variable(a), Variable(b)) => a == b,
            (
                Assign { name, value },
                Assign {
                    name: other_name,
                    value: other_value,
                },
            ) => name == other_name && value.same_shape(other_value),
            (
                Call { callee, args },
                Call {
                    callee: other_callee,
                    args: other_args,
                },
            ) => {
                callee.same_shape(other_callee)
                    && args.len() == other_args.len()
                    && args.iter().zip(other_args).all(|(a, b)| a.same_shape(b))
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.position)?;
        if let Some(ty) = self.ty() {
            write!(f, " : {ty}")?;
        }
        Ok(())
    }
}

/// Expression kinds.
#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    /// Numeric literal: `42`, `2.5`
    Number(f64),
    /// String literal without the quotes
    String(String),
    /// `true` / `false`
    Boolean(bool),
    /// `nil`
    Nil,

    /// `-x`, `!x`
    Unary { op: Operator, operand: Box<Expr> },
    /// `a + b`, `a and b`, ...
    Binary {
        op: Operator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `(inner)`
    Grouping(Box<Expr>),

    /// Variable reference
    Variable(String),
    /// `name = value`; an expression whose value is the assigned value
    Assign { name: String, value: Box<Expr> },
    /// `callee(args...)`
    Call { callee: Box<Expr>, args: Vec<Expr> },
}
