//! The checking pass.
//!
//! # Module Structure
//!
//! - `mod.rs`: `TypeChecker` state and scope handling
//! - `expr.rs`: expression rules (literals, operators, assignment, calls)
//! - `stmt.rs`: statement rules (declarations, control flow, functions)

mod expr;
mod stmt;

use quill_ir::{Stmt, Type};

use crate::{TypeEnv, TypeError};

/// Type checker over one environment.
pub struct TypeChecker<'env> {
    env: &'env mut TypeEnv,
    /// Declared result types of the enclosing functions, innermost last.
    return_types: Vec<Type>,
}

impl<'env> TypeChecker<'env> {
    pub fn new(env: &'env mut TypeEnv) -> Self {
        TypeChecker {
            env,
            return_types: Vec::new(),
        }
    }

    /// Check statements in order, stopping at the first error.
    pub fn check_stmts(&mut self, stmts: &[Stmt]) -> Result<(), TypeError> {
        stmts.iter().try_for_each(|stmt| self.check_stmt(stmt))
    }

    /// Run `f` inside a new scope named `name`, popping it on every path.
    fn with_scope<T>(&mut self, name: &str, f: impl FnOnce(&mut Self) -> T) -> T {
        self.env.push(name);
        tracing::trace!(path = %self.env.path_string(), "enter scope");
        let result = f(self);
        self.env.pop();
        result
    }
}

/// Check a whole program against `env`.
///
/// Top-level declarations are added to `env` as they are checked, so a
/// later call with the same environment sees them.
#[tracing::instrument(level = "debug", skip_all, fields(statements = program.len()))]
pub fn check_program(program: &[Stmt], env: &mut TypeEnv) -> Result<(), TypeError> {
    TypeChecker::new(env).check_stmts(program)
}
