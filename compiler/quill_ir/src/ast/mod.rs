//! Expression and statement trees.
//!
//! Each node owns its children exclusively; the tree is built bottom-up by the
//! parser and never mutated afterwards, except that the checker records the
//! resolved `Type` of every expression.
//!
//! # Module Structure
//!
//! - `expr`: `Expr`, `ExprKind`
//! - `stmt`: `Stmt`, `StmtKind`, `FunctionDecl`
//! - `printer`: source-form rendering

mod expr;
pub mod printer;
mod stmt;

pub use expr::{Expr, ExprKind};
pub use stmt::{FunctionDecl, Stmt, StmtKind};

#[cfg(test)]
mod tests;
