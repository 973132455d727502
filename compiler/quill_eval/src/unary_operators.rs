//! Unary operator implementations for the evaluator.

use quill_ir::Operator;

use crate::errors::{unary_downcast, EvalErrorKind};
use crate::Value;

/// Evaluate a unary operation.
///
/// `!` works on every value through truthiness; `-` needs a number and `+`
/// passes a number through.
pub fn evaluate_unary(value: Value, op: Operator) -> Result<Value, EvalErrorKind> {
    match (op, &value) {
        (Operator::Negate, _) => Ok(Value::Boolean(!value.is_truthy())),
        (Operator::Subtract, Value::Numeric(n)) => Ok(Value::Numeric(-n)),
        (Operator::Add, Value::Numeric(_)) => Ok(value),
        _ => Err(unary_downcast(op, value.type_name())),
    }
}
