//! User function calls.

use quill_ir::Position;

use super::{ExecOutcome, Interpreter};
use crate::errors::{arity_mismatch, not_callable, stack_overflow, EvalError, EvalResult};
use crate::Value;

impl Interpreter<'_> {
    /// Call `callee` with already evaluated arguments.
    ///
    /// The frame's parent is the function's declaring scope while that scope
    /// is live, otherwise the global scope. The frame is popped on every
    /// path, and a `return` inside the body stops here.
    pub(crate) fn call_value(
        &mut self,
        callee: Value,
        args: Vec<Value>,
        position: Position,
    ) -> EvalResult {
        let function = match callee {
            Value::Function(function) => function,
            other => return Err(EvalError::new(not_callable(other.type_name()), position)),
        };
        if args.len() != function.arity() {
            return Err(EvalError::new(
                arity_mismatch(function.name(), function.arity(), args.len()),
                position,
            ));
        }
        if let Some(limit) = self.max_call_depth {
            if self.call_depth >= limit {
                return Err(EvalError::new(stack_overflow(limit), position));
            }
        }

        let depth = self.env.len();
        self.env.push_with_parent(function.name(), function.closure);
        tracing::trace!(
            function = function.name(),
            path = %self.env.path_string(),
            "call"
        );
        for (param, arg) in function.decl.params.iter().zip(args) {
            self.env.set(param.as_str(), arg);
        }

        self.call_depth += 1;
        let outcome = self.exec_stmts(&function.decl.body);
        self.call_depth -= 1;
        self.env.truncate(depth);

        match outcome? {
            ExecOutcome::Return(value) => Ok(value),
            ExecOutcome::Normal => Ok(Value::Nil),
        }
    }
}
