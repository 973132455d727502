//! Statement rules.

use quill_ir::stack::ensure_sufficient_stack;
use quill_ir::{Expr, FunctionDecl, Position, Stmt, StmtKind, Type};

use super::TypeChecker;
use crate::TypeError;

impl TypeChecker<'_> {
    pub(crate) fn check_stmt(&mut self, stmt: &Stmt) -> Result<(), TypeError> {
        ensure_sufficient_stack(|| self.check_stmt_inner(stmt))
    }

    fn check_stmt_inner(&mut self, stmt: &Stmt) -> Result<(), TypeError> {
        match &stmt.kind {
            StmtKind::Expression(expr) | StmtKind::Print(expr) => {
                self.check_expr(expr)?;
            }

            StmtKind::Var { name, init } => {
                let ty = self.check_expr(init)?;
                self.env.set(name.as_str(), ty);
            }

            StmtKind::Block(stmts) => {
                self.with_scope("block", |this| this.check_stmts(stmts))?;
            }

            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.check_expr(cond)?;
                self.check_stmt(then_branch)?;
                if let Some(else_branch) = else_branch {
                    self.check_stmt(else_branch)?;
                }
            }

            StmtKind::While { cond, body } => {
                self.check_expr(cond)?;
                self.check_stmt(body)?;
            }

            StmtKind::For {
                init,
                cond,
                increment,
                body,
            } => {
                self.with_scope("for", |this| {
                    if let Some(init) = init {
                        this.check_stmt(init)?;
                    }
                    if let Some(cond) = cond {
                        this.check_expr(cond)?;
                    }
                    this.check_stmt(body)?;
                    if let Some(increment) = increment {
                        this.check_expr(increment)?;
                    }
                    Ok(())
                })?;
            }

            StmtKind::Function(decl) => self.check_function(decl)?,

            StmtKind::Return(value) => self.check_return(value.as_ref(), stmt.position)?,
        }
        Ok(())
    }

    /// Bind the function's name first so the body may recurse, then check the
    /// body with every parameter bound to `Any`.
    fn check_function(&mut self, decl: &FunctionDecl) -> Result<(), TypeError> {
        self.env.set(decl.name.as_str(), Type::ANY);
        tracing::trace!(name = %decl.name, arity = decl.arity(), "check function");

        self.return_types.push(decl.return_type);
        let result = self.with_scope(&decl.name, |this| {
            for param in &decl.params {
                this.env.set(param.as_str(), Type::ANY);
            }
            this.check_stmts(&decl.body)
        });
        self.return_types.pop();
        result
    }

    fn check_return(
        &mut self,
        value: Option<&Expr>,
        position: Position,
    ) -> Result<(), TypeError> {
        let found = match value {
            Some(value) => self.check_expr(value)?,
            None => Type::NIL,
        };
        let expected = self.return_types.last().copied().unwrap_or(Type::ANY);
        if expected.contains(found) {
            Ok(())
        } else {
            Err(TypeError::mismatch(expected, found, position))
        }
    }
}
