//! Value environment.
//!
//! Runtime bindings use the same scope arena as the checker, holding
//! `Value`s. Blocks and `for` loops push a child of the active scope; calls
//! push a frame whose parent is the function's declaring scope.

use quill_ir::Scopes;

use crate::Value;

/// Name → value bindings with lexical nesting.
pub type Environment = Scopes<Value>;

/// Name of the root scope of every environment.
pub const GLOBAL_SCOPE: &str = "global";

/// A fresh environment with only the global scope.
pub fn new_environment() -> Environment {
    Scopes::new(GLOBAL_SCOPE)
}
