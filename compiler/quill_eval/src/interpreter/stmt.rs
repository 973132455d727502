//! Statement execution.

use std::rc::Rc;

use quill_ir::stack::ensure_sufficient_stack;
use quill_ir::{Expr, Stmt, StmtKind};

use super::{ExecOutcome, Interpreter};
use crate::errors::EvalResult;
use crate::{UserFunction, Value};

impl Interpreter<'_> {
    /// Execute one statement.
    pub fn exec_stmt(&mut self, stmt: &Stmt) -> EvalResult<ExecOutcome> {
        ensure_sufficient_stack(|| self.exec_stmt_inner(stmt))
    }

    fn exec_stmt_inner(&mut self, stmt: &Stmt) -> EvalResult<ExecOutcome> {
        tracing::trace!(position = %stmt.position, "exec");
        match &stmt.kind {
            StmtKind::Expression(expr) => {
                self.eval_expr(expr)?;
            }

            StmtKind::Print(expr) => {
                let value = self.eval_expr(expr)?;
                self.print.println(&value.to_string());
            }

            StmtKind::Var { name, init } => {
                let value = self.eval_expr(init)?;
                self.env.set(name.as_str(), value);
            }

            StmtKind::Block(stmts) => {
                return self.with_scope("block", |this| this.exec_stmts(stmts));
            }

            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval_expr(cond)?.is_truthy() {
                    return self.exec_stmt(then_branch);
                }
                if let Some(else_branch) = else_branch {
                    return self.exec_stmt(else_branch);
                }
            }

            StmtKind::While { cond, body } => return self.run_loop(Some(cond), body, None),

            // Lowered to a scope holding `init`, around a while loop over
            // `body` then `increment`.
            StmtKind::For {
                init,
                cond,
                increment,
                body,
            } => {
                return self.with_scope("for", |this| {
                    if let Some(init) = init {
                        if let ExecOutcome::Return(value) = this.exec_stmt(init)? {
                            return Ok(ExecOutcome::Return(value));
                        }
                    }
                    this.run_loop(cond.as_ref(), body, increment.as_ref())
                });
            }

            StmtKind::Function(decl) => {
                let function = UserFunction {
                    decl: Rc::clone(decl),
                    closure: self.env.current(),
                };
                self.env
                    .set(decl.name.as_str(), Value::Function(Rc::new(function)));
            }

            StmtKind::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr)?,
                    None => Value::Nil,
                };
                return Ok(ExecOutcome::Return(value));
            }
        }
        Ok(ExecOutcome::Normal)
    }

    /// Execute statements in the active scope until one returns.
    pub(crate) fn exec_stmts(&mut self, stmts: &[Stmt]) -> EvalResult<ExecOutcome> {
        for stmt in stmts {
            if let ExecOutcome::Return(value) = self.exec_stmt(stmt)? {
                return Ok(ExecOutcome::Return(value));
            }
        }
        Ok(ExecOutcome::Normal)
    }

    /// Shared by `while` and lowered `for`. A missing condition is always true.
    fn run_loop(
        &mut self,
        cond: Option<&Expr>,
        body: &Stmt,
        increment: Option<&Expr>,
    ) -> EvalResult<ExecOutcome> {
        loop {
            if let Some(cond) = cond {
                if !self.eval_expr(cond)?.is_truthy() {
                    return Ok(ExecOutcome::Normal);
                }
            }
            if let ExecOutcome::Return(value) = self.exec_stmt(body)? {
                return Ok(ExecOutcome::Return(value));
            }
            if let Some(increment) = increment {
                self.eval_expr(increment)?;
            }
        }
    }
}
