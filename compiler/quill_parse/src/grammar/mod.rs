//! Grammar productions.
//!
//! Each production is a `Parser` method; productions call each other in
//! precedence order. Every node takes the position of its leftmost token.

mod expr;
mod operators;
mod stmt;
