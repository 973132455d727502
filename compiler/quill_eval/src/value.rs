//! Runtime values.
//!
//! Scalars are immutable once constructed. Strings share their text through
//! `Rc<str>` so copying a value out of the environment never copies bytes.

use std::fmt;
use std::rc::Rc;

use quill_ir::{format_number, FunctionDecl, ScopeId};

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    String(Rc<str>),
    Numeric(f64),
    Boolean(bool),
    Nil,
    Function(Rc<UserFunction>),
}

impl Value {
    pub fn string(s: &str) -> Self {
        Value::String(Rc::from(s))
    }

    /// Only `nil` and `false` are falsy. `0` and `""` are truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Boolean(false))
    }

    /// Tag name used in runtime diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "String",
            Value::Numeric(_) => "Numeric",
            Value::Boolean(_) => "Boolean",
            Value::Nil => "Nil",
            Value::Function(_) => "Function",
        }
    }
}

/// Same tag and same value. Values of different tags are never equal;
/// functions are equal only to themselves.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Numeric(a), Value::Numeric(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// The text `print` writes: strings without quotes, numbers in `%g` form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Numeric(n) => f.write_str(&format_number(*n)),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Nil => f.write_str("nil"),
            Value::Function(func) => write!(f, "<fn {}>", func.name()),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Numeric(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

/// A function value: its declaration plus the scope it was declared in.
#[derive(Debug)]
pub struct UserFunction {
    pub decl: Rc<FunctionDecl>,
    /// Scope active at declaration. Used as the call frame's parent while
    /// it is still live.
    pub closure: ScopeId,
}

impl UserFunction {
    #[inline]
    pub fn name(&self) -> &str {
        &self.decl.name
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.decl.arity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Boolean(false).is_truthy());
        assert!(Value::Boolean(true).is_truthy());
        assert!(Value::Numeric(0.0).is_truthy());
        assert!(Value::string("").is_truthy());
    }

    #[test]
    fn test_equality_is_tag_and_value() {
        assert_eq!(Value::Numeric(1.0), Value::Numeric(1.0));
        assert_ne!(Value::Numeric(1.0), Value::Numeric(2.0));
        assert_eq!(Value::string("a"), Value::string("a"));
        assert_ne!(Value::string("1"), Value::Numeric(1.0));
        assert_ne!(Value::Nil, Value::Boolean(false));
        assert_eq!(Value::Nil, Value::Nil);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::string("hi").to_string(), "hi");
        assert_eq!(Value::Numeric(3.0).to_string(), "3");
        assert_eq!(Value::Numeric(2.5).to_string(), "2.5");
        assert_eq!(Value::Numeric(1e21).to_string(), "1e+21");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Nil.to_string(), "nil");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::from(1.0).type_name(), "Numeric");
        assert_eq!(Value::from("s").type_name(), "String");
        assert_eq!(Value::from(false).type_name(), "Boolean");
        assert_eq!(Value::Nil.type_name(), "Nil");
    }
}
