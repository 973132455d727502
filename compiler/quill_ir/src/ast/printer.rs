//! Source-form rendering of AST nodes.
//!
//! Output re-parses to a tree of the same shape for every expression the
//! parser can produce. String literals are quoted here, unlike runtime `print`
//! output which shows string contents bare.

use std::fmt::Write;

use super::{Expr, ExprKind, Stmt, StmtKind};

/// Render an expression as source text.
///
/// ```
/// use quill_ir::ast::printer::print_expr;
/// use quill_ir::{Expr, ExprKind, Operator, Position};
///
/// let expr = Expr::new(
///     ExprKind::Binary {
///         op: Operator::Add,
///         left: Box::new(Expr::new(ExprKind::Number(1.0), Position::START)),
///         right: Box::new(Expr::new(ExprKind::String("a".into()), Position::START)),
///     },
///     Position::START,
/// );
/// assert_eq!(print_expr(&expr), "1 + \"a\"");
/// ```
pub fn print_expr(expr: &Expr) -> String {
    let mut out = String::new();
    Printer { out: &mut out }.expr(expr);
    out
}

/// Render a statement as single-line source text.
pub fn print_stmt(stmt: &Stmt) -> String {
    let mut out = String::new();
    Printer { out: &mut out }.stmt(stmt);
    out
}

struct Printer<'a> {
    out: &'a mut String,
}

impl Printer<'_> {
    fn expr(&mut self, expr: &Expr) {
        crate::stack::ensure_sufficient_stack(|| self.expr_inner(expr));
    }

    fn expr_inner(&mut self, expr: &Expr) {
        match &expr.kind {
            // Plain decimal keeps the literal lexable; the lexer has no exponents.
            ExprKind::Number(n) => {
                let _ = write!(self.out, "{n}");
            }
            ExprKind::String(s) => {
                self.out.push('"');
                self.out.push_str(s);
                self.out.push('"');
            }
            ExprKind::Boolean(b) => self.out.push_str(if *b { "true" } else { "false" }),
            ExprKind::Nil => self.out.push_str("nil"),
            ExprKind::Unary { op, operand } => {
                self.out.push_str(op.lexeme());
                self.expr(operand);
            }
            ExprKind::Binary { op, left, right } => {
                self.expr(left);
                self.out.push(' ');
                self.out.push_str(op.lexeme());
                self.out.push(' ');
                self.expr(right);
            }
            ExprKind::Grouping(inner) => {
                self.out.push('(');
                self.expr(inner);
                self.out.push(')');
            }
            ExprKind::Variable(name) => self.out.push_str(name),
            ExprKind::Assign { name, value } => {
                self.out.push_str(name);
                self.out.push_str(" = ");
                self.expr(value);
            }
            ExprKind::Call { callee, args } => {
                self.expr(callee);
                self.out.push('(');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.expr(arg);
                }
                self.out.push(')');
            }
        }
    }

    fn stmt(&mut self, stmt: &Stmt) {
        crate::stack::ensure_sufficient_stack(|| self.stmt_inner(stmt));
    }

    fn stmt_inner(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Expression(expr) => {
                self.expr(expr);
                self.out.push(';');
            }
            StmtKind::Print(expr) => {
                self.out.push_str("print ");
                self.expr(expr);
                self.out.push(';');
            }
            StmtKind::Var { name, init } => {
                self.out.push_str("var ");
                self.out.push_str(name);
                self.out.push_str(" = ");
                self.expr(init);
                self.out.push(';');
            }
            StmtKind::Block(stmts) => self.block(stmts),
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.out.push_str("if (");
                self.expr(cond);
                self.out.push_str(") ");
                self.stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.out.push_str(" else ");
                    self.stmt(else_branch);
                }
            }
            StmtKind::While { cond, body } => {
                self.out.push_str("while (");
                self.expr(cond);
                self.out.push_str(") ");
                self.stmt(body);
            }
            StmtKind::For {
                init,
                cond,
                increment,
                body,
            } => {
                self.out.push_str("for (");
                match init {
                    Some(init) => self.stmt(init),
                    None => self.out.push(';'),
                }
                if let Some(cond) = cond {
                    self.out.push(' ');
                    self.expr(cond);
                }
                self.out.push(';');
                if let Some(increment) = increment {
                    self.out.push(' ');
                    self.expr(increment);
                }
                self.out.push_str(") ");
                self.stmt(body);
            }
            StmtKind::Function(decl) => {
                self.out.push_str("fun ");
                self.out.push_str(&decl.name);
                self.out.push('(');
                self.out.push_str(&decl.params.join(", "));
                self.out.push_str(") ");
                self.block(&decl.body);
            }
            StmtKind::Return(value) => {
                self.out.push_str("return");
                if let Some(value) = value {
                    self.out.push(' ');
                    self.expr(value);
                }
                self.out.push(';');
            }
        }
    }

    fn block(&mut self, stmts: &[Stmt]) {
        if stmts.is_empty() {
            self.out.push_str("{}");
            return;
        }
        self.out.push_str("{ ");
        for stmt in stmts {
            self.stmt(stmt);
            self.out.push(' ');
        }
        self.out.push('}');
    }
}
