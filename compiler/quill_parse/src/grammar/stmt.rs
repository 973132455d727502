//! Declaration and statement parsing.

use std::rc::Rc;

use quill_ir::stack::ensure_sufficient_stack;
use quill_ir::{Expr, FunctionDecl, Stmt, StmtKind, TokenKind, Type};

use crate::{ParseError, ParseErrorKind, Parser, MAX_ARITY};

impl Parser<'_> {
    /// `funDecl | varDecl | statement`
    pub(crate) fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| match self.cursor.current_kind() {
            TokenKind::Fun => self.parse_fun_decl(),
            TokenKind::Var => self.parse_var_decl(),
            _ => self.parse_statement(),
        })
    }

    /// `"var" IDENT ( "=" expression )? ";"`
    fn parse_var_decl(&mut self) -> Result<Stmt, ParseError> {
        let position = self.cursor.advance().position;
        let name_token = self.cursor.expect(TokenKind::Identifier)?;
        let name = name_token.lexeme.clone();

        let init = if self.cursor.eat(TokenKind::Equal) {
            self.parse_expr()?
        } else {
            Expr::nil(name_token.position)
        };
        self.cursor.expect(TokenKind::Semicolon)?;

        Ok(Stmt::new(StmtKind::Var { name, init }, position))
    }

    /// `"fun" IDENT "(" params? ")" block`
    fn parse_fun_decl(&mut self) -> Result<Stmt, ParseError> {
        let position = self.cursor.advance().position;
        let name = self.cursor.expect_ident()?.to_owned();

        self.cursor.expect(TokenKind::LeftParen)?;
        let mut params = Vec::new();
        if !self.cursor.check(TokenKind::RightParen) {
            loop {
                if params.len() >= MAX_ARITY {
                    return Err(ParseError::new(
                        ParseErrorKind::TooManyParameters,
                        self.cursor.current_position(),
                    ));
                }
                params.push(self.cursor.expect_ident()?.to_owned());
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.cursor.expect(TokenKind::RightParen)?;

        self.cursor.expect(TokenKind::LeftBrace)?;
        self.function_depth += 1;
        let body = self.parse_block_body();
        self.function_depth -= 1;

        let decl = FunctionDecl {
            name,
            params,
            body: body?,
            return_type: Type::ANY,
            position,
        };
        Ok(Stmt::new(StmtKind::Function(Rc::new(decl)), position))
    }

    fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Print => self.parse_print(),
            TokenKind::LeftBrace => {
                let position = self.cursor.advance().position;
                let stmts = self.parse_block_body()?;
                Ok(Stmt::new(StmtKind::Block(stmts), position))
            }
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::For => self.parse_for(),
            TokenKind::Return => self.parse_return(),
            _ => self.parse_expr_stmt(),
        }
    }

    /// `"print" expression ";"`
    fn parse_print(&mut self) -> Result<Stmt, ParseError> {
        let position = self.cursor.advance().position;
        let value = self.parse_expr()?;
        self.cursor.expect(TokenKind::Semicolon)?;
        Ok(Stmt::new(StmtKind::Print(value), position))
    }

    /// `expression ";"`
    fn parse_expr_stmt(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expr()?;
        self.cursor.expect(TokenKind::Semicolon)?;
        let position = expr.position;
        Ok(Stmt::new(StmtKind::Expression(expr), position))
    }

    /// Declarations after `{`, through the closing `}`.
    fn parse_block_body(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut stmts = Vec::new();
        while !self.cursor.check(TokenKind::RightBrace) && !self.cursor.is_at_end() {
            stmts.push(self.parse_declaration()?);
        }
        self.cursor.expect(TokenKind::RightBrace)?;
        Ok(stmts)
    }

    /// `"if" "(" expression ")" statement ( "else" statement )?`
    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        let position = self.cursor.advance().position;
        self.cursor.expect(TokenKind::LeftParen)?;
        let cond = self.parse_expr()?;
        self.cursor.expect(TokenKind::RightParen)?;

        let then_branch = Box::new(self.parse_nested_statement()?);
        let else_branch = if self.cursor.eat(TokenKind::Else) {
            Some(Box::new(self.parse_nested_statement()?))
        } else {
            None
        };

        Ok(Stmt::new(
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            },
            position,
        ))
    }

    /// `"while" "(" expression ")" statement`
    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        let position = self.cursor.advance().position;
        self.cursor.expect(TokenKind::LeftParen)?;
        let cond = self.parse_expr()?;
        self.cursor.expect(TokenKind::RightParen)?;
        let body = Box::new(self.parse_nested_statement()?);

        Ok(Stmt::new(StmtKind::While { cond, body }, position))
    }

    /// `"for" "(" ( varDecl | exprStmt | ";" ) expression? ";" expression? ")" statement`
    fn parse_for(&mut self) -> Result<Stmt, ParseError> {
        let position = self.cursor.advance().position;
        self.cursor.expect(TokenKind::LeftParen)?;

        let init = match self.cursor.current_kind() {
            TokenKind::Semicolon => {
                self.cursor.advance();
                None
            }
            TokenKind::Var => Some(Box::new(self.parse_var_decl()?)),
            _ => Some(Box::new(self.parse_expr_stmt()?)),
        };

        let cond = if self.cursor.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.cursor.expect(TokenKind::Semicolon)?;

        let increment = if self.cursor.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.cursor.expect(TokenKind::RightParen)?;

        let body = Box::new(self.parse_nested_statement()?);

        Ok(Stmt::new(
            StmtKind::For {
                init,
                cond,
                increment,
                body,
            },
            position,
        ))
    }

    /// `"return" expression? ";"`
    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        let position = self.cursor.current_position();
        if self.function_depth == 0 {
            return Err(ParseError::new(
                ParseErrorKind::ReturnOutsideFunction,
                position,
            ));
        }
        self.cursor.advance();

        let value = if self.cursor.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.cursor.expect(TokenKind::Semicolon)?;

        Ok(Stmt::new(StmtKind::Return(value), position))
    }

    /// Branch or loop body. Declarations are only allowed inside a block.
    fn parse_nested_statement(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| self.parse_statement())
    }
}
