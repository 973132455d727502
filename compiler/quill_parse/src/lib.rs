//! Recursive descent parser for Quill.
//!
//! One token of lookahead, no backtracking. The first error aborts the parse.
//!
//! # Module Structure
//!
//! - `cursor`: token navigation, comment skipping
//! - `error`: `ParseError`, `ParseErrorKind`
//! - `grammar/stmt.rs`: declarations and statements
//! - `grammar/expr.rs`: the expression precedence chain
//! - `grammar/operators.rs`: operator matching helpers

mod cursor;
mod error;
mod grammar;

use cursor::Cursor;
use quill_ir::{Stmt, Token};

pub use error::{ParseError, ParseErrorKind, MAX_ARITY};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    /// Number of enclosing function bodies; `return` needs at least one.
    function_depth: u32,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            function_depth: 0,
        }
    }

    /// Parse declarations until end of input.
    pub fn parse_program(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut program = Vec::new();
        while !self.cursor.is_at_end() {
            program.push(self.parse_declaration()?);
        }
        Ok(program)
    }
}

/// Parse a token stream into a program.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Vec<Stmt>, ParseError> {
    let program = Parser::new(tokens).parse_program()?;
    tracing::trace!(statements = program.len(), "parsed");
    Ok(program)
}
