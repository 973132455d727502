//! Structural type checker for Quill.
//!
//! A single depth-first, left-to-right pass over the program that stops at
//! the first ill-typed construct. Types are set-valued (`quill_ir::Type`);
//! the wildcard `Any` flows through function parameters and call results.
//!
//! Every checked expression records its type on the node
//! (`Expr::set_ty`), so later phases can inspect what the checker saw.

mod check;
mod error;

use quill_ir::{Scopes, Type};

pub use check::{check_program, TypeChecker};
pub use error::{TypeError, TypeErrorKind};

/// Name → type bindings, scoped like the runtime environment.
pub type TypeEnv = Scopes<Type>;

/// Name of the root scope of every environment.
pub const GLOBAL_SCOPE: &str = "global";

/// A fresh environment with only the global scope.
pub fn new_type_env() -> TypeEnv {
    Scopes::new(GLOBAL_SCOPE)
}

#[cfg(test)]
mod tests;
