//! Binary operator implementations for the evaluator.
//!
//! Direct enum dispatch on the left operand's tag. Equality is tag-and-value
//! comparison and never consults the arithmetic table. `and`/`or` are
//! short-circuited by the interpreter before operands reach this module; if
//! both operands are already evaluated they select the same operand the
//! short-circuit would.

use std::rc::Rc;

use quill_ir::Operator;

use crate::errors::{binary_downcast, division_by_zero, EvalErrorKind};
use crate::Value;

/// Evaluate a binary operation on two evaluated operands.
pub fn evaluate_binary(left: Value, right: Value, op: Operator) -> Result<Value, EvalErrorKind> {
    match op {
        Operator::Equal => return Ok(Value::Boolean(left == right)),
        Operator::NotEqual => return Ok(Value::Boolean(left != right)),
        Operator::And => return Ok(if left.is_truthy() { right } else { left }),
        Operator::Or => return Ok(if left.is_truthy() { left } else { right }),
        _ => {}
    }

    match (&left, &right) {
        (Value::Numeric(a), Value::Numeric(b)) => eval_numeric_binary(*a, *b, op),
        (Value::String(a), Value::String(b)) => eval_string_binary(a, b, op),
        _ => Err(binary_downcast(op, left.type_name(), right.type_name())),
    }
}

/// Binary operations on numbers.
fn eval_numeric_binary(a: f64, b: f64, op: Operator) -> Result<Value, EvalErrorKind> {
    let value = match op {
        Operator::Add => Value::Numeric(a + b),
        Operator::Subtract => Value::Numeric(a - b),
        Operator::Multiply => Value::Numeric(a * b),
        Operator::Divide => {
            if b == 0.0 {
                return Err(division_by_zero());
            }
            Value::Numeric(a / b)
        }
        Operator::Less => Value::Boolean(a < b),
        Operator::LessEqual => Value::Boolean(a <= b),
        Operator::Greater => Value::Boolean(a > b),
        Operator::GreaterEqual => Value::Boolean(a >= b),
        _ => return Err(binary_downcast(op, "Numeric", "Numeric")),
    };
    Ok(value)
}

/// Binary operations on strings. Only `+` (concatenation) is defined.
fn eval_string_binary(a: &Rc<str>, b: &Rc<str>, op: Operator) -> Result<Value, EvalErrorKind> {
    match op {
        Operator::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::String(Rc::from(joined)))
        }
        _ => Err(binary_downcast(op, "String", "String")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn num(n: f64) -> Value {
        Value::Numeric(n)
    }

    fn eval(left: Value, right: Value, op: Operator) -> Value {
        match evaluate_binary(left, right, op) {
            Ok(value) => value,
            Err(err) => panic!("{op} should succeed: {err}"),
        }
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(eval(num(2.0), num(3.0), Operator::Add), num(5.0));
        assert_eq!(eval(num(2.0), num(3.0), Operator::Subtract), num(-1.0));
        assert_eq!(eval(num(2.0), num(3.0), Operator::Multiply), num(6.0));
        assert_eq!(eval(num(3.0), num(2.0), Operator::Divide), num(1.5));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            evaluate_binary(num(1.0), num(0.0), Operator::Divide),
            Err(EvalErrorKind::DivideByZero)
        );
        assert_eq!(
            evaluate_binary(num(0.0), num(-0.0), Operator::Divide),
            Err(EvalErrorKind::DivideByZero)
        );
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(eval(num(1.0), num(2.0), Operator::Less), Value::Boolean(true));
        assert_eq!(eval(num(2.0), num(2.0), Operator::LessEqual), Value::Boolean(true));
        assert_eq!(eval(num(1.0), num(2.0), Operator::Greater), Value::Boolean(false));
        assert_eq!(eval(num(2.0), num(2.0), Operator::GreaterEqual), Value::Boolean(true));
    }

    #[test]
    fn test_concatenation() {
        assert_eq!(
            eval(Value::string("foo"), Value::string("bar"), Operator::Add),
            Value::string("foobar")
        );
    }

    #[test]
    fn test_equality_across_tags() {
        assert_eq!(eval(num(1.0), Value::string("1"), Operator::Equal), Value::Boolean(false));
        assert_eq!(eval(Value::Nil, Value::Nil, Operator::Equal), Value::Boolean(true));
        assert_eq!(
            eval(Value::Nil, Value::Boolean(false), Operator::NotEqual),
            Value::Boolean(true)
        );
    }

    #[test]
    fn test_logical_select_operand() {
        assert_eq!(eval(Value::Nil, num(1.0), Operator::And), Value::Nil);
        assert_eq!(eval(num(0.0), num(1.0), Operator::And), num(1.0));
        assert_eq!(eval(num(0.0), num(1.0), Operator::Or), num(0.0));
        assert_eq!(eval(Value::Boolean(false), num(1.0), Operator::Or), num(1.0));
    }

    #[test]
    fn test_mismatched_tags_are_downcast_errors() {
        let Err(err) = evaluate_binary(num(1.0), Value::Boolean(true), Operator::Add) else {
            panic!("mixed operands should fail");
        };
        assert_eq!(
            err,
            EvalErrorKind::Downcast {
                op: Operator::Add,
                operands: "Numeric and Boolean".into(),
            }
        );
        assert!(evaluate_binary(Value::string("a"), Value::string("b"), Operator::Less).is_err());
    }
}
