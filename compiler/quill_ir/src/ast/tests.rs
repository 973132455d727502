use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::printer::{print_expr, print_stmt};
use super::*;
use crate::{Operator, Position, Type};

fn at(line: u32, column: u32) -> Position {
    Position::new(line, column)
}

fn num(n: f64, position: Position) -> Expr {
    Expr::new(ExprKind::Number(n), position)
}

fn var(name: &str) -> Expr {
    Expr::new(ExprKind::Variable(name.to_owned()), Position::START)
}

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

fn stmt(kind: StmtKind) -> Stmt {
    Stmt::new(kind, Position::START)
}

mod shape {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ignores_positions() {
        let a = binary(Operator::Add, num(1.0, at(1, 1)), num(2.0, at(1, 5)));
        let b = binary(Operator::Add, num(1.0, at(3, 2)), num(2.0, at(4, 9)));
        assert!(a.same_shape(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_ignores_recorded_types() {
        let a = num(1.0, Position::START);
        let b = num(1.0, Position::START);
        a.set_ty(Type::NUMERIC);
        assert!(a.same_shape(&b));
        assert_eq!(a.ty(), Some(Type::NUMERIC));
        assert_eq!(b.ty(), None);
    }

    #[test]
    fn test_distinguishes_operators_and_literals() {
        let add = binary(Operator::Add, var("a"), var("b"));
        let sub = binary(Operator::Subtract, var("a"), var("b"));
        assert!(!add.same_shape(&sub));
        assert!(!num(1.0, Position::START).same_shape(&num(2.0, Position::START)));
        assert!(!num(0.0, Position::START).same_shape(&Expr::nil(Position::START)));
    }

    #[test]
    fn test_statements() {
        let a = stmt(StmtKind::Block(vec![stmt(StmtKind::Print(var("x")))]));
        let b = Stmt::new(
            StmtKind::Block(vec![Stmt::new(StmtKind::Print(var("x")), at(2, 3))]),
            at(2, 1),
        );
        let c = stmt(StmtKind::Block(vec![]));
        assert!(a.same_shape(&b));
        assert!(!a.same_shape(&c));
    }
}

mod printing {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_literals() {
        assert_eq!(print_expr(&num(3.0, Position::START)), "3");
        assert_eq!(print_expr(&num(2.5, Position::START)), "2.5");
        assert_eq!(
            print_expr(&Expr::new(ExprKind::String("hi".into()), Position::START)),
            "\"hi\""
        );
        assert_eq!(print_expr(&Expr::nil(Position::START)), "nil");
    }

    #[test]
    fn test_nested_expressions() {
        let grouped = Expr::new(
            ExprKind::Grouping(Box::new(binary(Operator::Add, var("a"), var("b")))),
            Position::START,
        );
        let expr = binary(Operator::Multiply, grouped, var("c"));
        assert_eq!(print_expr(&expr), "(a + b) * c");

        let negated = Expr::new(
            ExprKind::Unary {
                op: Operator::Negate,
                operand: Box::new(var("ok")),
            },
            Position::START,
        );
        assert_eq!(print_expr(&negated), "!ok");
    }

    #[test]
    fn test_call_and_assignment() {
        let call = Expr::new(
            ExprKind::Call {
                callee: Box::new(var("f")),
                args: vec![num(1.0, Position::START), var("x")],
            },
            Position::START,
        );
        let assign = Expr::new(
            ExprKind::Assign {
                name: "y".to_owned(),
                value: Box::new(call),
            },
            Position::START,
        );
        assert_eq!(print_expr(&assign), "y = f(1, x)");
    }

    #[test]
    fn test_statements() {
        let var_decl = stmt(StmtKind::Var {
            name: "a".to_owned(),
            init: Expr::nil(Position::START),
        });
        assert_eq!(print_stmt(&var_decl), "var a = nil;");

        let branch = stmt(StmtKind::If {
            cond: var("a"),
            then_branch: Box::new(stmt(StmtKind::Print(var("a")))),
            else_branch: Some(Box::new(stmt(StmtKind::Block(vec![])))),
        });
        assert_eq!(print_stmt(&branch), "if (a) print a; else {}");

        let looped = stmt(StmtKind::For {
            init: None,
            cond: None,
            increment: Some(var("i")),
            body: Box::new(stmt(StmtKind::Block(vec![stmt(StmtKind::Return(None))]))),
        });
        assert_eq!(print_stmt(&looped), "for (;; i) { return; }");
    }

    #[test]
    fn test_function_declaration() {
        let decl = FunctionDecl {
            name: "id".to_owned(),
            params: vec!["x".to_owned()],
            body: vec![stmt(StmtKind::Return(Some(var("x"))))],
            return_type: Type::ANY,
            position: Position::START,
        };
        assert_eq!(decl.arity(), 1);

        let function = stmt(StmtKind::Function(Rc::new(decl)));
        assert_eq!(print_stmt(&function), "fun id(x) { return x; }");
        assert_eq!(print_stmt(&stmt(StmtKind::Expression(var("id")))), "id;");
    }
}

#[test]
fn test_debug_shows_position_and_type() {
    let expr = num(1.0, at(2, 4));
    assert_eq!(format!("{expr:?}"), "Number(1.0) @ 2:4");
    expr.set_ty(Type::NUMERIC);
    assert_eq!(format!("{expr:?}"), "Number(1.0) @ 2:4 : Numeric");
}
