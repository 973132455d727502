//! Quill IR - shared data model
//!
//! This crate contains the types every phase of the Quill pipeline agrees on:
//! - `Position`, `LineOffsetTable` and `LineCursor` for source locations
//! - `Token` / `TokenKind` produced by the lexer
//! - `Operator` derived from operator tokens
//! - `Type`, the set-valued gradual type used by the checker
//! - AST nodes (`Expr`, `Stmt`, `FunctionDecl`) and a source-form printer
//! - `Scopes<T>`, the arena-backed scope chain shared by checker and evaluator
//!
//! # Design Philosophy
//!
//! - **Closed enums**: every phase matches exhaustively on `ExprKind`/`StmtKind`.
//! - **Positions by value**: `Position` is `Copy` and attached to every token and node.
//! - **Index-addressed scopes**: no parent back-pointers, so no `Rc` cycles.

pub mod ast;
mod line_table;
mod number;
mod operator;
mod position;
mod scope;
pub mod stack;
mod token;
mod ty;

pub use ast::{Expr, ExprKind, FunctionDecl, Stmt, StmtKind};
pub use line_table::{LineCursor, LineOffsetTable};
pub use number::format_number;
pub use operator::{NotAnOperator, Operator};
pub use position::Position;
pub use scope::{ScopeId, Scopes, Unbound};
pub use token::{Token, TokenKind};
pub use ty::{Type, TypeTags};
