//! Tree-walking interpreter.
//!
//! Runs a program that has already passed the type checker. Control flow
//! out of a function body travels as `ExecOutcome::Return` through ordinary
//! return values; only runtime failures use the error channel.
//!
//! # Module Structure
//!
//! - `mod.rs`: `Interpreter` state, scope handling, program entry point
//! - `expr.rs`: expression evaluation
//! - `stmt.rs`: statement execution and loop lowering
//! - `call.rs`: user function calls

mod call;
mod expr;
mod stmt;

use quill_ir::Stmt;

use crate::errors::EvalResult;
use crate::{Environment, SharedPrintHandler, Value};

/// Default limit on nested user function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// How a statement finished.
#[derive(Clone, Debug, PartialEq)]
pub enum ExecOutcome {
    /// Fell through; continue with the next statement.
    Normal,
    /// A `return` ran; unwind to the nearest call.
    Return(Value),
}

/// Interpreter over one environment and one print sink.
pub struct Interpreter<'env> {
    env: &'env mut Environment,
    print: SharedPrintHandler,
    call_depth: usize,
    max_call_depth: Option<usize>,
}

impl<'env> Interpreter<'env> {
    pub fn new(env: &'env mut Environment, print: SharedPrintHandler) -> Self {
        Interpreter {
            env,
            print,
            call_depth: 0,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }

    /// Limit nested calls; `None` relies on stack growth alone.
    #[must_use]
    pub fn with_max_call_depth(mut self, max_call_depth: Option<usize>) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }

    /// Execute top-level statements in order, stopping at the first error.
    ///
    /// A `return` at top level (only constructible by hand, the parser
    /// rejects it) ends the program.
    pub fn run(&mut self, program: &[Stmt]) -> EvalResult<()> {
        for stmt in program {
            if let ExecOutcome::Return(_) = self.exec_stmt(stmt)? {
                break;
            }
        }
        Ok(())
    }

    /// Run `f` inside a new child scope named `name`. The scope, and anything
    /// pushed above it, is gone when this returns, error or not.
    fn with_scope<T>(&mut self, name: &str, f: impl FnOnce(&mut Self) -> T) -> T {
        let depth = self.env.len();
        self.env.push(name);
        tracing::trace!(path = %self.env.path_string(), "enter scope");
        let result = f(self);
        self.env.truncate(depth);
        result
    }
}

/// Execute `program` against `env`, writing `print` output to `print`.
#[tracing::instrument(level = "debug", skip_all, fields(statements = program.len()))]
pub fn execute(
    program: &[Stmt],
    env: &mut Environment,
    print: SharedPrintHandler,
) -> EvalResult<()> {
    Interpreter::new(env, print).run(program)
}
