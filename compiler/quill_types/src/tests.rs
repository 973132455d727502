use super::*;
use quill_ir::{ExprKind, Operator, Position, Stmt, StmtKind};

fn parse(source: &str) -> Vec<Stmt> {
    let Ok(tokens) = quill_lexer::lex(source) else {
        panic!("`{source}` should lex");
    };
    match quill_parse::parse(&tokens) {
        Ok(program) => program,
        Err(err) => panic!("`{source}` should parse: {err}"),
    }
}

fn check_ok(source: &str) -> Vec<Stmt> {
    let program = parse(source);
    let mut env = new_type_env();
    if let Err(err) = check_program(&program, &mut env) {
        panic!("`{source}` should type-check: {err}");
    }
    program
}

fn check_err(source: &str) -> TypeError {
    let program = parse(source);
    let mut env = new_type_env();
    let Err(err) = check_program(&program, &mut env) else {
        panic!("`{source}` should fail to type-check");
    };
    err
}

/// Type recorded on the expression of a single `print` statement.
fn printed_type(source: &str) -> Type {
    let program = check_ok(source);
    let Some(Stmt {
        kind: StmtKind::Print(expr),
        ..
    }) = program.last()
    else {
        panic!("last statement should be print");
    };
    let Some(ty) = expr.ty() else {
        panic!("checked expression should carry a type");
    };
    ty
}

mod literals {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_literal_types() {
        assert_eq!(printed_type("print 1;"), Type::NUMERIC);
        assert_eq!(printed_type("print \"s\";"), Type::STRING);
        assert_eq!(printed_type("print true;"), Type::BOOLEAN);
        assert_eq!(printed_type("print nil;"), Type::NIL);
    }

    #[test]
    fn test_grouping_passes_type_through() {
        assert_eq!(printed_type("print (\"s\");"), Type::STRING);
    }
}

mod variables {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_declared_variable_type() {
        assert_eq!(printed_type("var a = 1; print a;"), Type::NUMERIC);
    }

    #[test]
    fn test_undefined_variable() {
        let err = check_err("print missing;");
        assert_eq!(
            err.kind,
            TypeErrorKind::UndefinedVariable {
                name: "missing".into()
            }
        );
        assert_eq!(err.position, Position::new(1, 7));
    }

    #[test]
    fn test_assignment_requires_declaration() {
        let err = check_err("x = 1;");
        assert!(matches!(err.kind, TypeErrorKind::UndefinedVariable { .. }));
    }

    #[test]
    fn test_assignment_retypes_variable() {
        assert_eq!(printed_type("var a = 1; a = \"s\"; print a;"), Type::STRING);
    }

    #[test]
    fn test_assignment_writes_owning_scope() {
        assert_eq!(
            printed_type("var a = 1; { a = \"s\"; } print a;"),
            Type::STRING
        );
    }

    #[test]
    fn test_block_scope_is_discarded() {
        let err = check_err("{ var inner = 1; } print inner;");
        assert!(matches!(err.kind, TypeErrorKind::UndefinedVariable { .. }));
    }

    #[test]
    fn test_shadowing_in_block() {
        assert_eq!(
            printed_type("var a = 1; { var a = \"s\"; } print a;"),
            Type::NUMERIC
        );
    }

    #[test]
    fn test_for_scope_is_discarded() {
        let err = check_err("for (var i = 0; i < 1; i = i + 1) {} print i;");
        assert!(matches!(err.kind, TypeErrorKind::UndefinedVariable { .. }));
    }
}

mod operators {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_arithmetic() {
        assert_eq!(printed_type("print 1 + 2 * 3 - 4 / 5;"), Type::NUMERIC);
        assert_eq!(printed_type("print -1;"), Type::NUMERIC);
    }

    #[test]
    fn test_string_concatenation() {
        assert_eq!(printed_type("print \"a\" + \"b\";"), Type::STRING);
    }

    #[test]
    fn test_number_plus_string_is_rejected() {
        let err = check_err("1 + \"s\";");
        assert_eq!(
            err.kind,
            TypeErrorKind::InvalidBinaryOperatorForType {
                op: Operator::Add,
                left: Type::NUMERIC,
                right: Type::STRING,
            }
        );
        assert_eq!(
            err.to_string(),
            "[1:1] type error: invalid operand types for add: Numeric and String"
        );
    }

    #[test]
    fn test_string_subtraction_is_rejected() {
        let err = check_err("\"a\" - \"b\";");
        assert!(matches!(
            err.kind,
            TypeErrorKind::InvalidBinaryOperatorForType {
                op: Operator::Subtract,
                ..
            }
        ));
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(printed_type("print 1 < 2;"), Type::BOOLEAN);
        let err = check_err("\"a\" < \"b\";");
        assert!(matches!(
            err.kind,
            TypeErrorKind::InvalidBinaryOperatorForType {
                op: Operator::Less,
                ..
            }
        ));
    }

    #[test]
    fn test_equality_requires_compatible_types() {
        assert_eq!(printed_type("print 1 == 2;"), Type::BOOLEAN);
        assert_eq!(printed_type("print \"a\" != \"b\";"), Type::BOOLEAN);
        let err = check_err("1 == \"1\";");
        assert!(matches!(
            err.kind,
            TypeErrorKind::InvalidBinaryOperatorForType {
                op: Operator::Equal,
                ..
            }
        ));
    }

    #[test]
    fn test_logical_operators_union() {
        assert_eq!(
            printed_type("print 1 or \"s\";"),
            Type::NUMERIC.union(Type::STRING)
        );
        assert_eq!(printed_type("print nil and false;"), Type::NIL.union(Type::BOOLEAN));
    }

    #[test]
    fn test_negate_accepts_anything() {
        assert_eq!(printed_type("print !\"s\";"), Type::BOOLEAN);
        assert_eq!(printed_type("print !nil;"), Type::BOOLEAN);
    }

    #[test]
    fn test_minus_on_string_is_rejected() {
        let err = check_err("-\"s\";");
        assert_eq!(
            err.kind,
            TypeErrorKind::InvalidUnaryOperatorForType {
                op: Operator::Subtract,
                operand: Type::STRING,
            }
        );
    }

    #[test]
    fn test_mixed_union_is_not_numeric() {
        let err = check_err("var a = 1 or nil; print a + 1;");
        assert!(matches!(
            err.kind,
            TypeErrorKind::InvalidBinaryOperatorForType {
                op: Operator::Add,
                ..
            }
        ));
    }
}

mod functions {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parameters_are_any() {
        check_ok("fun f(a, b) { print a + b; print a - 1; print -b; }");
    }

    #[test]
    fn test_call_result_is_any() {
        assert_eq!(printed_type("fun f() { return 1; } print f();"), Type::ANY);
        check_ok("fun f() { return 1; } print f() + \"s\";");
    }

    #[test]
    fn test_recursion_sees_own_name() {
        check_ok("fun fib(n) { if (n < 2) return n; return fib(n - 1) + fib(n - 2); }");
    }

    #[test]
    fn test_parameters_do_not_leak() {
        let err = check_err("fun f(a) {} print a;");
        assert!(matches!(err.kind, TypeErrorKind::UndefinedVariable { .. }));
    }

    #[test]
    fn test_undefined_call_arguments_are_checked() {
        let err = check_err("fun f(a) {} f(missing);");
        assert_eq!(
            err.kind,
            TypeErrorKind::UndefinedVariable {
                name: "missing".into()
            }
        );
    }

    #[test]
    fn test_return_checked_against_declared_type() {
        let mut program = parse("fun f() { return \"s\"; }");
        let Some(Stmt {
            kind: StmtKind::Function(decl),
            ..
        }) = program.first_mut()
        else {
            panic!("expected function");
        };
        let Some(decl) = std::rc::Rc::get_mut(decl) else {
            panic!("decl is uniquely owned");
        };
        decl.return_type = Type::NUMERIC;

        let mut env = new_type_env();
        let Err(err) = check_program(&program, &mut env) else {
            panic!("return type should be enforced");
        };
        assert_eq!(
            err.kind,
            TypeErrorKind::TypeMismatch {
                expected: Type::NUMERIC,
                found: Type::STRING,
            }
        );
        assert_eq!(err.position, Position::new(1, 11));
    }
}

mod environment {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_env_persists_across_programs() {
        let mut env = new_type_env();
        let first = parse("var a = 1;");
        let Ok(()) = check_program(&first, &mut env) else {
            panic!("first program should check");
        };
        let second = parse("print a + 1;");
        assert_eq!(check_program(&second, &mut env), Ok(()));
    }

    #[test]
    fn test_scopes_are_unwound_after_error() {
        let mut env = new_type_env();
        let program = parse("{ { print missing; } }");
        assert!(check_program(&program, &mut env).is_err());
        assert_eq!(env.path(), vec![GLOBAL_SCOPE]);
    }

    #[test]
    fn test_nested_expression_types_are_recorded() {
        let program = check_ok("print 1 + 2;");
        let StmtKind::Print(expr) = &program[0].kind else {
            panic!("expected print");
        };
        let ExprKind::Binary { left, right, .. } = &expr.kind else {
            panic!("expected binary");
        };
        assert_eq!(left.ty(), Some(Type::NUMERIC));
        assert_eq!(right.ty(), Some(Type::NUMERIC));
    }
}
