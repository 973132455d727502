//! Expression parsing.
//!
//! Precedence, low to high: assignment, `or`, `and`, equality, comparison,
//! term, factor, unary, call, primary. Binary levels fold to the left;
//! assignment and unary recurse to the right.

use quill_ir::stack::ensure_sufficient_stack;
use quill_ir::{Expr, ExprKind, Operator, TokenKind};

use crate::{ParseError, ParseErrorKind, Parser, MAX_ARITY};

impl Parser<'_> {
    /// Parse an expression.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    /// `IDENT "=" assignment | logic_or`
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let target = self.parse_binary_or()?;

        if !self.cursor.check(TokenKind::Equal) {
            return Ok(target);
        }
        self.cursor.advance();
        let value = self.parse_expr()?;

        match target.kind {
            ExprKind::Variable(name) => Ok(Expr::new(
                ExprKind::Assign {
                    name,
                    value: Box::new(value),
                },
                target.position,
            )),
            _ => Err(ParseError::new(
                ParseErrorKind::InvalidAssignmentTarget,
                target.position,
            )),
        }
    }

    /// Parse `or` (lowest precedence binary).
    fn parse_binary_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_binary_and()?;

        while self.cursor.eat(TokenKind::Or) {
            let right = self.parse_binary_and()?;
            left = binary(Operator::Or, left, right);
        }

        Ok(left)
    }

    /// Parse `and`.
    fn parse_binary_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_equality()?;

        while self.cursor.eat(TokenKind::And) {
            let right = self.parse_equality()?;
            left = binary(Operator::And, left, right);
        }

        Ok(left)
    }

    /// Parse `==` `!=`.
    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_comparison()?;

        while let Some(op) = self.match_equality_op() {
            self.cursor.advance();
            let right = self.parse_comparison()?;
            left = binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `<` `<=` `>` `>=`.
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;

        while let Some(op) = self.match_comparison_op() {
            self.cursor.advance();
            let right = self.parse_term()?;
            left = binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `+` `-`.
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_factor()?;

        while let Some(op) = self.match_term_op() {
            self.cursor.advance();
            let right = self.parse_factor()?;
            left = binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `*` `/`.
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        while let Some(op) = self.match_factor_op() {
            self.cursor.advance();
            let right = self.parse_unary()?;
            left = binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse prefix `!` `-`.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let Some(op) = self.match_unary_op() else {
            return self.parse_call();
        };
        let position = self.cursor.advance().position;
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            position,
        ))
    }

    /// Parse `primary ( "(" arguments? ")" )*`.
    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let mut callee = self.parse_primary()?;

        while self.cursor.eat(TokenKind::LeftParen) {
            let args = self.parse_arguments()?;
            let position = callee.position;
            callee = Expr::new(
                ExprKind::Call {
                    callee: Box::new(callee),
                    args,
                },
                position,
            );
        }

        Ok(callee)
    }

    /// Arguments after `(`, through the closing `)`.
    fn parse_arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        if !self.cursor.check(TokenKind::RightParen) {
            loop {
                if args.len() >= MAX_ARITY {
                    return Err(ParseError::new(
                        ParseErrorKind::TooManyArguments,
                        self.cursor.current_position(),
                    ));
                }
                args.push(self.parse_expr()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.cursor.expect(TokenKind::RightParen)?;
        Ok(args)
    }

    /// Literals, variables and parenthesised groups.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        let position = token.position;

        let kind = match token.kind {
            TokenKind::Number => {
                let Ok(n) = token.lexeme.parse::<f64>() else {
                    return Err(ParseError::new(
                        ParseErrorKind::NumberConversion {
                            lexeme: token.lexeme.clone(),
                        },
                        position,
                    ));
                };
                ExprKind::Number(n)
            }
            TokenKind::String => ExprKind::String(unquote(&token.lexeme).to_owned()),
            TokenKind::True => ExprKind::Boolean(true),
            TokenKind::False => ExprKind::Boolean(false),
            TokenKind::Nil => ExprKind::Nil,
            TokenKind::Identifier => ExprKind::Variable(token.lexeme.clone()),
            TokenKind::LeftParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.cursor.expect(TokenKind::RightParen)?;
                return Ok(Expr::new(ExprKind::Grouping(Box::new(inner)), position));
            }
            found => {
                return Err(ParseError::new(
                    ParseErrorKind::MissingTerminal { found },
                    position,
                ));
            }
        };

        self.cursor.advance();
        Ok(Expr::new(kind, position))
    }
}

/// Left-leaning binary node positioned at its left operand.
fn binary(op: Operator, left: Expr, right: Expr) -> Expr {
    let position = left.position;
    Expr::new(
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        position,
    )
}

/// Strip the surrounding quotes from a string token's lexeme.
fn unquote(lexeme: &str) -> &str {
    lexeme
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(lexeme)
}
