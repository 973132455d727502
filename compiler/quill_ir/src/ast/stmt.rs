//! Statement nodes.

use std::fmt;
use std::rc::Rc;

use super::Expr;
use crate::{Position, Type};

/// Statement node.
#[derive(Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub position: Position,
}

impl Stmt {
    pub fn new(kind: StmtKind, position: Position) -> Self {
        Stmt { kind, position }
    }

    /// Structural equality ignoring positions and recorded types.
    pub fn same_shape(&self, other: &Stmt) -> bool {
        fn all_same(a: &[Stmt], b: &[Stmt]) -> bool {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_shape(y))
        }
        fn opt_same<T>(a: Option<&T>, b: Option<&T>, same: impl Fn(&T, &T) -> bool) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => same(a, b),
                (None, None) => true,
                _ => false,
            }
        }

        match (&self.kind, &other.kind) {
            (StmtKind::Expression(a), StmtKind::Expression(b))
            | (StmtKind::Print(a), StmtKind::Print(b)) => a.same_shape(b),
            (
                StmtKind::Var { name, init },
                StmtKind::Var {
                    name: other_name,
                    init: other_init,
                },
            ) => name == other_name && init.same_shape(other_init),
            (StmtKind::Block(a), StmtKind::Block(b)) => all_same(a, b),
            (
                StmtKind::If {
                    cond,
                    then_branch,
                    else_branch,
                },
                StmtKind::If {
                    cond: other_cond,
                    then_branch: other_then,
                    else_branch: other_else,
                },
            ) => {
                cond.same_shape(other_cond)
                    && then_branch.same_shape(other_then)
                    && opt_same(else_branch.as_deref(), other_else.as_deref(), Stmt::same_shape)
            }
            (
                StmtKind::While { cond, body },
                StmtKind::While {
                    cond: other_cond,
                    body: other_body,
                },
            ) => cond.same_shape(other_cond) && body.same_shape(other_body),
            (
                StmtKind::For {
                    init,
                    cond,
                    increment,
                    body,
                },
                StmtKind::For {
                    init: other_init,
                    cond: other_cond,
                    increment: other_increment,
                    body: other_body,
                },
            ) => {
                opt_same(init.as_deref(), other_init.as_deref(), Stmt::same_shape)
                    && opt_same(cond.as_ref(), other_cond.as_ref(), Expr::same_shape)
                    && opt_same(increment.as_ref(), other_increment.as_ref(), Expr::same_shape)
                    && body.same_shape(other_body)
            }
            (StmtKind::Function(a), StmtKind::Function(b)) => {
                a.name == b.name
                    && a.params == b.params
                    && a.return_type == b.return_type
                    && all_same(&a.body, &b.body)
            }
            (StmtKind::Return(a), StmtKind::Return(b)) => {
                opt_same(a.as_ref(), b.as_ref(), Expr::same_shape)
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.position)
    }
}

/// Statement kinds.
#[derive(Clone, PartialEq, Debug)]
pub enum StmtKind {
    /// Expression evaluated for its side effects
    Expression(Expr),
    /// `print expr;`
    Print(Expr),
    /// `var name = init;` (init is a `nil` literal when omitted)
    Var { name: String, init: Expr },
    /// `{ ... }`
    Block(Vec<Stmt>),
    /// `if (cond) then_branch else else_branch`
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    /// `while (cond) body`
    While { cond: Expr, body: Box<Stmt> },
    /// `for (init; cond; increment) body`
    For {
        init: Option<Box<Stmt>>,
        cond: Option<Expr>,
        increment: Option<Expr>,
        body: Box<Stmt>,
    },
    /// `fun name(params) { body }`
    Function(Rc<FunctionDecl>),
    /// `return value;`
    Return(Option<Expr>),
}

/// A user function declaration.
///
/// Shared by reference between the tree and every runtime function value
/// created from it.
#[derive(Clone, PartialEq, Debug)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
    /// Declared result type. The surface grammar has no annotations, so the
    /// parser always records `Any`.
    pub return_type: Type,
    pub position: Position,
}

impl FunctionDecl {
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
