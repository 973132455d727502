//! Expression rules.

use quill_ir::stack::ensure_sufficient_stack;
use quill_ir::{Expr, ExprKind, Operator, Position, Type, TypeTags};

use super::TypeChecker;
use crate::TypeError;

impl TypeChecker<'_> {
    /// Check `expr`, record its type on the node and return it.
    pub(crate) fn check_expr(&mut self, expr: &Expr) -> Result<Type, TypeError> {
        let ty = ensure_sufficient_stack(|| self.check_expr_inner(expr))?;
        expr.set_ty(ty);
        Ok(ty)
    }

    fn check_expr_inner(&mut self, expr: &Expr) -> Result<Type, TypeError> {
        match &expr.kind {
            ExprKind::Number(_) => Ok(Type::NUMERIC),
            ExprKind::String(_) => Ok(Type::STRING),
            ExprKind::Boolean(_) => Ok(Type::BOOLEAN),
            ExprKind::Nil => Ok(Type::NIL),

            ExprKind::Variable(name) => self
                .env
                .get(name)
                .copied()
                .ok_or_else(|| TypeError::undefined_variable(name, expr.position)),

            ExprKind::Assign { name, value } => {
                let ty = self.check_expr(value)?;
                self.env
                    .assign(name, ty)
                    .map_err(|_| TypeError::undefined_variable(name, expr.position))?;
                Ok(ty)
            }

            ExprKind::Unary { op, operand } => {
                let operand = self.check_expr(operand)?;
                check_unary(*op, operand, expr.position)
            }

            ExprKind::Binary { op, left, right } => {
                let left = self.check_expr(left)?;
                let right = self.check_expr(right)?;
                check_binary(*op, left, right, expr.position)
            }

            ExprKind::Grouping(inner) => self.check_expr(inner),

            ExprKind::Call { callee, args } => {
                self.check_expr(callee)?;
                for arg in args {
                    self.check_expr(arg)?;
                }
                Ok(Type::ANY)
            }
        }
    }
}

fn check_unary(op: Operator, operand: Type, position: Position) -> Result<Type, TypeError> {
    match op {
        Operator::Subtract | Operator::Add if operand.within(TypeTags::NUMERIC) => Ok(operand),
        Operator::Negate => Ok(Type::BOOLEAN),
        _ => Err(TypeError::invalid_unary(op, operand, position)),
    }
}

fn check_binary(
    op: Operator,
    left: Type,
    right: Type,
    position: Position,
) -> Result<Type, TypeError> {
    let numeric = left.within(TypeTags::NUMERIC) && right.within(TypeTags::NUMERIC);
    let strings = left.within(TypeTags::STRING) && right.within(TypeTags::STRING);

    let ok = match op {
        Operator::Add => (numeric || strings) && left.contains(right),
        Operator::Subtract | Operator::Multiply | Operator::Divide => {
            numeric && left.contains(right)
        }
        Operator::Less | Operator::LessEqual | Operator::Greater | Operator::GreaterEqual => {
            numeric && left.compatible(right)
        }
        Operator::Equal | Operator::NotEqual => left.compatible(right),
        Operator::And | Operator::Or => true,
        Operator::Negate => false,
    };
    if !ok {
        return Err(TypeError::invalid_binary(op, left, right, position));
    }

    Ok(if op.is_comparison() || op.is_equality() {
        Type::BOOLEAN
    } else {
        left.union(right)
    })
}
