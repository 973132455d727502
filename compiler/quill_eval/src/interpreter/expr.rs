//! Expression evaluation.

use quill_ir::stack::ensure_sufficient_stack;
use quill_ir::{Expr, ExprKind, Operator, Position};

use super::Interpreter;
use crate::errors::{undefined_variable, EvalError, EvalErrorKind, EvalResult};
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::Value;

impl Interpreter<'_> {
    /// Evaluate an expression.
    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr))
    }

    fn eval_expr_inner(&mut self, expr: &Expr) -> EvalResult {
        let position = expr.position;
        match &expr.kind {
            ExprKind::Number(n) => Ok(Value::Numeric(*n)),
            ExprKind::String(s) => Ok(Value::string(s)),
            ExprKind::Boolean(b) => Ok(Value::Boolean(*b)),
            ExprKind::Nil => Ok(Value::Nil),

            ExprKind::Variable(name) => self
                .env
                .get(name)
                .cloned()
                .ok_or_else(|| at(position)(undefined_variable(name))),

            ExprKind::Assign { name, value } => {
                let value = self.eval_expr(value)?;
                self.env
                    .assign(name, value.clone())
                    .map_err(|_| at(position)(undefined_variable(name)))?;
                Ok(value)
            }

            ExprKind::Unary { op, operand } => {
                let operand = self.eval_expr(operand)?;
                evaluate_unary(operand, *op).map_err(at(position))
            }

            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(left)?;
                match op {
                    Operator::And if !left.is_truthy() => return Ok(left),
                    Operator::Or if left.is_truthy() => return Ok(left),
                    Operator::And | Operator::Or => return self.eval_expr(right),
                    _ => {}
                }
                let right = self.eval_expr(right)?;
                evaluate_binary(left, right, *op).map_err(at(position))
            }

            ExprKind::Grouping(inner) => self.eval_expr(inner),

            ExprKind::Call { callee, args } => {
                let callee = self.eval_expr(callee)?;
                let args = args
                    .iter()
                    .map(|arg| self.eval_expr(arg))
                    .collect::<EvalResult<Vec<_>>>()?;
                self.call_value(callee, args, position)
            }
        }
    }
}

/// Attach `position` to an error kind.
fn at(position: Position) -> impl Fn(EvalErrorKind) -> EvalError {
    move |kind| EvalError::new(kind, position)
}
